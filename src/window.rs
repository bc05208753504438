//! Page window arithmetic
//!
//! Pure functions that turn paging parameters into skip/take bounds. Nothing
//! here looks at a data source.

use crate::config::PagingDefaults;
use crate::error::{PageError, Result};

/// The contiguous slice of an ordered source that makes up one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of leading elements to skip
    pub skip: usize,
    /// Maximum number of elements to take
    pub take: usize,
    /// Normalized 1-based page number
    pub page: usize,
    /// Normalized page size
    pub page_size: usize,
}

impl PageWindow {
    /// Window for page-number addressing with the stock defaults
    ///
    /// A missing page means page 1, a missing page size means 10.
    ///
    /// # Examples
    /// ```
    /// use paged_query::PageWindow;
    ///
    /// let window = PageWindow::from_page(Some(3), Some(10));
    /// assert_eq!((window.skip, window.take), (20, 10));
    ///
    /// let window = PageWindow::from_page(None, None);
    /// assert_eq!((window.page, window.page_size), (1, 10));
    /// ```
    pub fn from_page(page: Option<usize>, page_size: Option<usize>) -> Self {
        Self::from_page_with(page, page_size, &PagingDefaults::default())
    }

    /// Window for page-number addressing with caller-supplied defaults
    pub fn from_page_with(
        page: Option<usize>,
        page_size: Option<usize>,
        defaults: &PagingDefaults,
    ) -> Self {
        let page = page.unwrap_or(defaults.page);
        let page_size = page_size.unwrap_or(defaults.page_size);

        // Page 0 clamps to a zero skip
        let skip = page.saturating_sub(1).saturating_mul(page_size);

        Self {
            skip,
            take: page_size,
            page,
            page_size,
        }
    }

    /// Window for zero-based offset addressing
    ///
    /// The page number is the page the offset falls on, rounding up when
    /// `start` is not a multiple of `limit`. An offset of zero is page 1.
    ///
    /// # Examples
    /// ```
    /// use paged_query::PageWindow;
    ///
    /// let window = PageWindow::from_offset(25, 10).unwrap();
    /// assert_eq!(window.page, 3);
    /// assert_eq!((window.skip, window.take), (25, 10));
    ///
    /// assert!(PageWindow::from_offset(5, 0).is_err());
    /// ```
    pub fn from_offset(start: usize, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(PageError::invalid_argument("limit must be greater than zero"));
        }

        let page = if start == 0 {
            1
        } else {
            start.div_ceil(limit)
        };

        Ok(Self {
            skip: start,
            take: limit,
            page,
            page_size: limit,
        })
    }
}

/// Number of pages needed to hold `total` items
///
/// Zero items always means zero pages. A zero page size is only an error when
/// there is something to page.
///
/// # Examples
/// ```
/// use paged_query::page_count;
///
/// assert_eq!(page_count(23, 10).unwrap(), 3);
/// assert_eq!(page_count(20, 10).unwrap(), 2);
/// assert_eq!(page_count(0, 0).unwrap(), 0);
/// assert!(page_count(5, 0).is_err());
/// ```
pub fn page_count(total: usize, page_size: usize) -> Result<usize> {
    if total == 0 {
        return Ok(0);
    }
    if page_size == 0 {
        return Err(PageError::invalid_argument(
            "page size must be greater than zero",
        ));
    }
    Ok(total.div_ceil(page_size))
}
