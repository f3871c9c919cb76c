//! Paginated list envelope and page requests.
//!
//! The API answers list requests in two shapes: a flat envelope
//! `{data, page, limit, total, totalPages}` and a nested one
//! `{data, meta: {page, limit, total, totalPages}}`. A few endpoints return a
//! bare JSON array. All of them deserialize into [`Page`].

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Page number and size sent with every list request. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page: page.max(1), limit: limit.clamp(1, MAX_PAGE_LIMIT) }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Arrays are read as a bare list; anything else must be an envelope, so item
/// errors inside `data` surface with their own message.
impl<'de, T> Deserialize<'de> for Page<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let page = if value.is_array() {
            serde_json::from_value::<Vec<T>>(value).map(dto::bare_page)
        } else {
            serde_json::from_value::<dto::EnvelopeDto<T>>(value).map(dto::EnvelopeDto::into_page)
        };
        page.map_err(D::Error::custom)
    }
}

fn total_pages_for(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

mod dto {
    use super::*;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EnvelopeDto<T> {
        pub data: Vec<T>,
        #[serde(default)]
        pub page: Option<u32>,
        #[serde(default)]
        pub limit: Option<u32>,
        #[serde(default)]
        pub total: Option<u64>,
        #[serde(default)]
        pub total_pages: Option<u32>,
        #[serde(default)]
        pub meta: Option<MetaDto>,
    }

    #[derive(Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct MetaDto {
        #[serde(default)]
        pub page: Option<u32>,
        #[serde(default)]
        pub limit: Option<u32>,
        #[serde(default)]
        pub total: Option<u64>,
        #[serde(default)]
        pub total_pages: Option<u32>,
    }

    pub fn bare_page<T>(data: Vec<T>) -> Page<T> {
        let len = data.len();
        Page {
            data,
            page: 1,
            limit: u32::try_from(len).unwrap_or(u32::MAX),
            total: len as u64,
            total_pages: u32::from(len > 0),
        }
    }

    impl<T> EnvelopeDto<T> {
        pub fn into_page(self) -> Page<T> {
            let meta = self.meta.unwrap_or_default();
            let count = self.data.len();

            let page = self.page.or(meta.page).unwrap_or(1).max(1);
            let total = self.total.or(meta.total).unwrap_or(count as u64);
            let limit = self
                .limit
                .or(meta.limit)
                .unwrap_or_else(|| u32::try_from(count).unwrap_or(u32::MAX));
            let total_pages = self
                .total_pages
                .or(meta.total_pages)
                .unwrap_or_else(|| total_pages_for(total, limit));

            Page { data: self.data, page, limit, total, total_pages }
        }
    }
}
