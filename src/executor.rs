//! Paged query execution
//!
//! Counts a source once, orders it when a sort column is given, checks the
//! requested page and materializes the window into a [`Page`].

use crate::error::Result;
use crate::page::{checked_page_index, Page};
use crate::sort::SortSpec;
use crate::source::OrderedSource;
use crate::window::PageWindow;
use tracing::debug;

/// How a sorted request addresses its window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// 1-based page number and page size, each defaulted when missing
    Page {
        page: Option<usize>,
        page_size: Option<usize>,
    },
    /// Zero-based element offset and a page-size limit
    Offset { start: usize, limit: usize },
}

impl Addressing {
    /// Page-number addressing
    pub fn page(page: usize, page_size: usize) -> Self {
        Addressing::Page {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Offset addressing
    pub fn offset(start: usize, limit: usize) -> Self {
        Addressing::Offset { start, limit }
    }

    /// Compute the window this addressing selects
    pub fn window(&self) -> Result<PageWindow> {
        match *self {
            Addressing::Page { page, page_size } => Ok(PageWindow::from_page(page, page_size)),
            Addressing::Offset { start, limit } => PageWindow::from_offset(start, limit),
        }
    }
}

/// Page a source in its natural order
///
/// Missing `page` means 1 and missing `page_size` means 10.
///
/// # Examples
/// ```
/// use paged_query::{paginate, SliceSource};
///
/// let numbers: Vec<u32> = (1..=23).collect();
/// let page = paginate(&SliceSource::new(&numbers), Some(3), Some(10)).unwrap();
///
/// assert_eq!(page.items(), &[21, 22, 23]);
/// assert_eq!(page.page_count(), 3);
/// assert!(paginate(&SliceSource::new(&numbers), Some(4), Some(10)).is_err());
/// ```
pub fn paginate<T, S>(source: &S, page: Option<usize>, page_size: Option<usize>) -> Result<Page<T>>
where
    S: OrderedSource<T>,
{
    let window = PageWindow::from_page(page, page_size);
    execute_window(source, window)
}

/// Page a source, optionally sorted by a column named at runtime
///
/// `sort_column` follows the `name [ASC|DESC]` grammar. A `sort_direction`
/// argument overrides any embedded keyword. The whole source is ordered
/// before the window is taken.
///
/// # Examples
/// ```
/// use paged_query::{paginate_sorted, Addressing, SliceSource, SortFields};
///
/// let fields = SortFields::new().field("Value", |v: &i32| *v);
/// let data = vec![5, 1, 3];
/// let source = SliceSource::new(&data).with_sort_fields(&fields);
///
/// let page = paginate_sorted(&source, Addressing::page(1, 3), Some("Value DESC"), None).unwrap();
/// assert_eq!(page.items(), &[5, 3, 1]);
///
/// let missing = paginate_sorted(&source, Addressing::page(1, 3), Some("Nonexistent"), None);
/// assert!(missing.is_err());
/// ```
pub fn paginate_sorted<T, S>(
    source: &S,
    addressing: Addressing,
    sort_column: Option<&str>,
    sort_direction: Option<&str>,
) -> Result<Page<T>>
where
    S: OrderedSource<T>,
{
    let window = addressing.window()?;

    let spec = sort_column.and_then(|raw| SortSpec::resolve(raw, sort_direction));
    match spec {
        Some(spec) => {
            let key = source.resolve_member(&spec.column)?;
            debug!(column = %spec.column, direction = %spec.direction, "Ordering source");
            let ordered = source.order_by(&key, spec.direction);
            execute_window(&ordered, window)
        }
        None => execute_window(source, window),
    }
}

fn execute_window<T, S>(source: &S, window: PageWindow) -> Result<Page<T>>
where
    S: OrderedSource<T>,
{
    let total = source.count();
    debug!(
        total,
        page = window.page,
        page_size = window.page_size,
        skip = window.skip,
        take = window.take,
        "Windowing source"
    );

    if total == 0 {
        return Ok(Page::empty(window.page_size));
    }

    // Reject bad pages before anything is materialized
    let page = checked_page_index(window.page, window.page_size, total)?;
    let items = source.slice(window.skip, window.take);

    Page::new(items, page, window.page_size, total)
}
