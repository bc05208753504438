//! # paged-query
//!
//! Page windowing and runtime-named column sorting over ordered, countable
//! sources.
//!
//! Given a data source, a page number (or a raw offset), a page size and a
//! sort column supplied as a string, this crate produces the correctly
//! ordered window of items together with pagination metadata.
//!
//! ## Features
//!
//! - **Page container**: [`Page`] stores items, total count, page index and
//!   page size, and derives page count, previous/next flags and 1-based
//!   start/end positions
//! - **Window arithmetic**: page-number and offset addressing with defaults
//! - **Sort by name**: `"Column [ASC|DESC]"` strings resolved through a
//!   per-type registry of typed keys, no reflection
//! - **Source abstraction**: page anything that implements [`OrderedSource`]
//!
//! ## Examples
//!
//! ### Unsorted paging
//!
//! ```rust
//! use paged_query::{paginate, SliceSource};
//!
//! let rows: Vec<u32> = (1..=23).collect();
//! let page = paginate(&SliceSource::new(&rows), Some(3), Some(10)).unwrap();
//!
//! assert_eq!(page.items(), &[21, 22, 23]);
//! assert_eq!((page.start_index(), page.end_index()), (21, 23));
//! assert!(!page.has_next_page());
//! ```
//!
//! ### Sorting by a column name
//!
//! ```rust
//! use paged_query::{paginate_sorted, Addressing, SliceSource, SortFields, Sortable};
//! use std::sync::OnceLock;
//!
//! #[derive(Clone)]
//! struct Member {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Sortable for Member {
//!     fn sort_fields() -> &'static SortFields<Self> {
//!         static FIELDS: OnceLock<SortFields<Member>> = OnceLock::new();
//!         FIELDS.get_or_init(|| {
//!             SortFields::new()
//!                 .field("Name", |m: &Member| m.name.clone())
//!                 .field("Age", |m: &Member| m.age)
//!         })
//!     }
//! }
//!
//! let members = vec![
//!     Member { name: "ann".into(), age: 5 },
//!     Member { name: "bob".into(), age: 1 },
//!     Member { name: "cat".into(), age: 3 },
//! ];
//! let source = SliceSource::sortable(&members);
//!
//! let page = paginate_sorted(&source, Addressing::page(1, 3), Some("Age DESC"), None).unwrap();
//! let ages: Vec<u32> = page.iter().map(|m| m.age).collect();
//! assert_eq!(ages, vec![5, 3, 1]);
//! ```
//!
//! ### Error conditions
//!
//! ```rust
//! use paged_query::{paginate, paginate_sorted, Addressing, PageError, SliceSource};
//!
//! let rows: Vec<u32> = (1..=23).collect();
//! let source = SliceSource::new(&rows);
//!
//! assert!(matches!(
//!     paginate(&source, Some(4), Some(10)),
//!     Err(PageError::OutOfRange { page: 4, page_count: 3 })
//! ));
//! assert!(matches!(
//!     paginate_sorted(&source, Addressing::offset(0, 0), None, None),
//!     Err(PageError::InvalidArgument { .. })
//! ));
//! assert!(matches!(
//!     paginate_sorted(&source, Addressing::page(1, 10), Some("Nonexistent"), None),
//!     Err(PageError::NotFound { .. })
//! ));
//! ```

mod config;
mod error;
mod executor;
mod page;
mod request;
mod sort;
mod source;
mod window;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use config::{PagingDefaults, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use error::{PageError, Result};
pub use executor::{paginate, paginate_sorted, Addressing};
pub use page::{Page, PageInfo};
pub use request::PageRequest;
pub use sort::{KeySelector, SortDirection, SortFields, SortSpec, Sortable};
pub use source::{OrderedSource, SliceSource};
pub use window::{page_count, PageWindow};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
