//! Caller-facing page requests
//!
//! Web handlers usually receive paging parameters as loose query-string
//! values, either `page`/`pagesize` or `start`/`limit`, with optional
//! `sort` and `dir`. [`PageRequest`] deserializes that shape directly.

use crate::config::PagingDefaults;
use crate::error::Result;
use crate::executor::{paginate_sorted, Addressing};
use crate::page::Page;
use crate::source::OrderedSource;
use serde::{Deserialize, Serialize};

/// Paging parameters as a client sends them
///
/// # Examples
/// ```
/// use paged_query::{PageRequest, PagingDefaults, SliceSource, SortFields};
///
/// let request: PageRequest =
///     serde_json::from_str(r#"{ "start": 2, "limit": 2, "sort": "Value", "dir": "desc" }"#)
///         .unwrap();
///
/// let fields = SortFields::new().field("Value", |v: &i32| *v);
/// let data = vec![1, 2, 3, 4, 5];
/// let source = SliceSource::new(&data).with_sort_fields(&fields);
///
/// let page = request.execute(&source, &PagingDefaults::default()).unwrap();
/// assert_eq!(page.items(), &[3, 2]);
/// assert_eq!(page.current_page_index(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// 1-based page number
    pub page: Option<usize>,
    /// Items per page
    #[serde(alias = "pagesize", alias = "pageSize")]
    pub page_size: Option<usize>,
    /// Zero-based element offset; selects offset addressing
    pub start: Option<usize>,
    /// Items per page in offset addressing
    pub limit: Option<usize>,
    /// Sort column, optionally followed by `ASC` or `DESC`
    pub sort: Option<String>,
    /// Sort direction overriding any keyword in `sort`
    pub dir: Option<String>,
}

impl PageRequest {
    /// Request for a page number and size
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Request for an offset and limit
    pub fn offset(start: usize, limit: usize) -> Self {
        Self {
            start: Some(start),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Add a sort column
    pub fn sorted_by(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Addressing mode selected by the set fields
    ///
    /// Any of `start` or `limit` selects offset addressing. Unset values
    /// fall back to `defaults`.
    pub fn addressing(&self, defaults: &PagingDefaults) -> Addressing {
        if self.start.is_some() || self.limit.is_some() {
            Addressing::Offset {
                start: self.start.unwrap_or(0),
                limit: self
                    .limit
                    .or(self.page_size)
                    .unwrap_or(defaults.page_size),
            }
        } else {
            Addressing::Page {
                page: Some(self.page.unwrap_or(defaults.page)),
                page_size: Some(self.page_size.unwrap_or(defaults.page_size)),
            }
        }
    }

    /// Run this request against `source`
    pub fn execute<T, S>(&self, source: &S, defaults: &PagingDefaults) -> Result<Page<T>>
    where
        S: OrderedSource<T>,
    {
        paginate_sorted(
            source,
            self.addressing(defaults),
            self.sort.as_deref(),
            self.dir.as_deref(),
        )
    }
}
