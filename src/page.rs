//! The page container
//!
//! A [`Page`] owns one materialized window of a larger ordered collection and
//! knows where that window sits. Only the item count, page index and page
//! size are stored; everything else is derived.

use crate::error::{PageError, Result};
use crate::window::page_count;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One page of results plus its position in the whole
///
/// # Examples
/// ```
/// use paged_query::Page;
///
/// let page = Page::new(vec![21, 22, 23], 3, 10, 23).unwrap();
/// assert_eq!(page.page_count(), 3);
/// assert_eq!((page.start_index(), page.end_index()), (21, 23));
/// assert!(page.has_previous_page());
/// assert!(!page.has_next_page());
///
/// // Pages beyond the end are rejected, not clamped
/// assert!(Page::new(Vec::<i32>::new(), 4, 10, 23).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    total_item_count: usize,
    current_page_index: usize,
    page_size: usize,
}

/// Metadata for a page, with every derived value spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_item_count: usize,
    pub current_page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub start_index: usize,
    pub end_index: usize,
}

/// Check a requested page index against the total it will be paged over
///
/// Returns the index the page should carry: the requested one, or 0 when
/// there is nothing to page.
pub(crate) fn checked_page_index(page: usize, page_size: usize, total: usize) -> Result<usize> {
    if total == 0 {
        return Ok(0);
    }

    let page_count = page_count(total, page_size)?;
    if page == 0 || page > page_count {
        return Err(PageError::OutOfRange { page, page_count });
    }

    Ok(page)
}

impl<T> Page<T> {
    /// Build a page from an already windowed set of items
    ///
    /// With `total == 0` the page is empty and its index is 0 whatever was
    /// requested. Otherwise `page_size` must be non-zero and `page` must lie
    /// in `1..=page_count`, and `items` must fit in the page.
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total: usize) -> Result<Self> {
        let current_page_index = checked_page_index(page, page_size, total)?;

        if total == 0 {
            return Ok(Self::empty(page_size));
        }

        if items.len() > page_size {
            return Err(PageError::invalid_argument(format!(
                "page holds {} items but page size is {}",
                items.len(),
                page_size
            )));
        }

        Ok(Self {
            items,
            total_item_count: total,
            current_page_index,
            page_size,
        })
    }

    /// Page over an empty source
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_item_count: 0,
            current_page_index: 0,
            page_size,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total_item_count(&self) -> usize {
        self.total_item_count
    }

    /// 1-based index of this page, 0 for an empty source
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages in the whole collection
    pub fn page_count(&self) -> usize {
        // Construction guarantees a non-zero page size when total > 0
        if self.total_item_count == 0 {
            0
        } else {
            self.total_item_count.div_ceil(self.page_size)
        }
    }

    /// `current_page_index - 1 > 0`
    pub fn has_previous_page(&self) -> bool {
        self.current_page_index.saturating_sub(1) > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page_index.saturating_mul(self.page_size) < self.total_item_count
    }

    /// 1-based position of the first item in the whole collection, 0 when empty
    pub fn start_index(&self) -> usize {
        if self.total_item_count == 0 {
            return 0;
        }
        (self.current_page_index - 1) * self.page_size + 1
    }

    /// 1-based position of the last item in the whole collection, 0 when empty
    pub fn end_index(&self) -> usize {
        if self.total_item_count == 0 {
            return 0;
        }
        (self.start_index() + self.items.len()).saturating_sub(1)
    }

    /// Snapshot of the page metadata
    pub fn info(&self) -> PageInfo {
        PageInfo {
            total_item_count: self.total_item_count,
            current_page_index: self.current_page_index,
            page_size: self.page_size,
            page_count: self.page_count(),
            has_previous_page: self.has_previous_page(),
            has_next_page: self.has_next_page(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
    }

    /// Transform the items, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_item_count: self.total_item_count,
            current_page_index: self.current_page_index,
            page_size: self.page_size,
        }
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
