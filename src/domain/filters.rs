//! Filter objects for list endpoints.

/// Filters attached to a list request. Implementors emit only the fields that
/// are set, using the API's query parameter names.
pub trait ListFilters: Clone + Default + PartialEq {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Lists without server-side filtering.
impl ListFilters for () {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Trimmed value of an optional text filter, or `None` when blank.
pub(crate) fn text_filter(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}
