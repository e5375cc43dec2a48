use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One numbered page of a listing, with enough bookkeeping for a caller to
/// render "showing 5-8 of 17" and previous/next controls. An empty page is a
/// successful result; `unavailable` is the structured signal for it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based position of the first item within the full result; 0 when
    /// the result is empty.
    pub start_index: u64,
    /// 1-based position of the last item within the full result; 0 when the
    /// result is empty.
    pub end_index: u64,
    pub unavailable: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, page_size: u32) -> Self {
        let page_size = u64::from(page_size.max(1));
        let total_pages = total.div_ceil(page_size).max(1);
        let (start_index, end_index) = if items.is_empty() {
            (0, 0)
        } else {
            let start = (page - 1) * page_size + 1;
            (start, start + items.len() as u64 - 1)
        };

        Self {
            unavailable: items.is_empty(),
            has_previous: page > 1,
            has_next: page < total_pages,
            items,
            total,
            page,
            total_pages,
            start_index,
            end_index,
        }
    }

    pub fn empty(page_size: u32) -> Self {
        Self::new(Vec::new(), 0, 1, page_size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
            start_index: self.start_index,
            end_index: self.end_index,
            unavailable: self.unavailable,
        }
    }
}
