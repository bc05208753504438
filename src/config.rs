//! Paging defaults
//!
//! Values applied when a caller leaves the page number or page size unset.
//! Defaults can be built in code or loaded from a JSON document.

use crate::error::{PageError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page number used when none is requested
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none is requested
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fallback values for unset paging parameters
///
/// # Examples
/// ```
/// use paged_query::PagingDefaults;
///
/// let defaults = PagingDefaults::from_json_str(r#"{ "page_size": 25 }"#).unwrap();
/// assert_eq!(defaults.page, 1);
/// assert_eq!(defaults.page_size, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingDefaults {
    /// Page number for requests without one
    pub page: usize,
    /// Page size for requests without one
    pub page_size: usize,
}

impl Default for PagingDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagingDefaults {
    /// Parse defaults from a JSON document, filling missing fields
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: PagingDefaults = serde_json::from_str(json)?;
        defaults.validate()
    }

    /// Load defaults from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| PageError::Io {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_json_str(&contents)
    }

    fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(PageError::invalid_argument(
                "default page size must be greater than zero",
            ));
        }
        Ok(self)
    }
}
