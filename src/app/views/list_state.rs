//! Paged list state shared by every list view.
//!
//! A list keeps its page, limit and filters between loads and refuses to
//! issue a request that is already in flight or whose result is already
//! displayed. Changing the limit or the filters always returns to page 1.

use log::debug;

use crate::domain::{AppError, ListFilters, Page, PageRequest};

/// A load that was started by [`ListState::begin_load`] and must be handed
/// back to [`ListState::complete_load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest<F> {
    pub page: PageRequest,
    pub filters: F,
    key: String,
}

#[derive(Debug, Clone)]
pub struct ListState<F: ListFilters, T> {
    page: u32,
    limit: u32,
    filters: F,
    items: Vec<T>,
    total: u64,
    total_pages: u32,
    in_flight: bool,
    last_loaded_key: Option<String>,
    error: Option<String>,
}

impl<F: ListFilters, T> ListState<F, T> {
    pub fn new(limit: u32) -> Self {
        let request = PageRequest::first(limit);
        Self {
            page: request.page,
            limit: request.limit,
            filters: F::default(),
            items: Vec::new(),
            total: 0,
            total_pages: 0,
            in_flight: false,
            last_loaded_key: None,
            error: None,
        }
    }

    pub fn with_filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    /// Identity of the current (page, limit, filters) combination.
    pub fn cache_key(&self) -> String {
        let filters = self
            .filters
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}|{}|{}", self.page, self.limit, filters)
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = PageRequest::first(limit).limit;
        self.page = 1;
    }

    /// Replace the filters. The page only resets when the filters changed.
    pub fn set_filters(&mut self, filters: F) {
        if filters != self.filters {
            self.filters = filters;
            self.page = 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page when there is one. Returns whether the page moved.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Forget the loaded key so the next load refetches the same page.
    pub fn refresh(&mut self) {
        self.last_loaded_key = None;
    }

    /// Start a load for the current state, or `None` when a load is already
    /// running or the current key is already displayed.
    pub fn begin_load(&mut self) -> Option<LoadRequest<F>> {
        let key = self.cache_key();
        if self.in_flight {
            debug!("Skipping list load for {}: request already in flight", key);
            return None;
        }
        if self.last_loaded_key.as_deref() == Some(key.as_str()) {
            debug!("Skipping list load for {}: already loaded", key);
            return None;
        }
        self.in_flight = true;
        Some(LoadRequest { page: self.page_request(), filters: self.filters.clone(), key })
    }

    /// Apply the outcome of a load started with [`ListState::begin_load`].
    ///
    /// On failure the loaded key is cleared so the same request may be
    /// retried, and the error message is kept for display.
    pub fn complete_load(
        &mut self,
        request: LoadRequest<F>,
        result: Result<Page<T>, AppError>,
    ) -> Result<(), AppError> {
        self.in_flight = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.total = page.total;
                self.total_pages = page.total_pages;
                self.error = None;
                if request.key == self.cache_key() {
                    self.last_loaded_key = Some(request.key);
                } else {
                    debug!("List state moved on while {} was loading", request.key);
                    self.last_loaded_key = None;
                }
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.last_loaded_key = None;
                Err(err)
            }
        }
    }

    /// Run a full load cycle with `fetch`. Returns `Ok(false)` when the load
    /// was suppressed.
    pub fn load_with<Fetch>(&mut self, fetch: Fetch) -> Result<bool, AppError>
    where
        Fetch: FnOnce(PageRequest, &F) -> Result<Page<T>, AppError>,
    {
        let Some(request) = self.begin_load() else {
            return Ok(false);
        };
        let result = fetch(request.page, &request.filters);
        self.complete_load(request, result).map(|_| true)
    }
}
