//! Page-number pagination over the newest-first post feed
//!
//! A request names a 1-based page and a page size. It is resolved against the
//! total post count taken at read time into a [`PageWindow`], which carries the
//! offset/limit pair handed to the repository.
//!
//! The view is a snapshot: posts inserted between two page fetches shift the
//! remaining posts towards later pages. Callers must not treat page numbers as
//! stable cursors.

use crate::error::DomainError;

/// Page returned when the client does not ask for one
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 5;
/// Largest page size a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of pages needed to show `total_count` items, `ceil(total / size)`
///
/// Returns 0 for an empty collection. `page_size` must be positive.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    debug_assert!(page_size > 0);
    if total_count <= 0 {
        0
    } else {
        (total_count - 1) / page_size + 1
    }
}

/// Unresolved page request as supplied by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a request, falling back to the defaults for missing values
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Resolve the request against the current number of posts
    ///
    /// An empty feed always resolves to a single empty page, whatever page was
    /// asked for. Otherwise pages outside `1..=total_pages` are rejected.
    pub fn resolve(self, total_count: i64) -> Result<PageWindow, DomainError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(DomainError::InvalidPageSize {
                page_size: self.page_size,
                max: MAX_PAGE_SIZE,
            });
        }

        let total_count = total_count.max(0);
        let pages = total_pages(total_count, self.page_size);

        if pages == 0 {
            return Ok(PageWindow {
                page: DEFAULT_PAGE,
                page_size: self.page_size,
                total_pages: 1,
                total_count: 0,
            });
        }

        if self.page < 1 || self.page > pages {
            return Err(DomainError::PageNotFound {
                page: self.page,
                total_pages: pages,
            });
        }

        Ok(PageWindow {
            page: self.page,
            page_size: self.page_size,
            total_pages: pages,
            total_count,
        })
    }
}

/// A resolved, in-range page of the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

impl PageWindow {
    /// Rows to skip in the newest-first ordering
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Maximum rows to return
    #[inline]
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Number of posts this page will hold
    pub fn expected_len(&self) -> i64 {
        (self.total_count - self.offset()).clamp(0, self.page_size)
    }

    /// True when there is nothing to fetch
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
