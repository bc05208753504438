//! Sorting by a column named at runtime
//!
//! Column strings follow a small grammar, `name [ASC|DESC]`, with a
//! case-insensitive direction keyword. Names are looked up in a per-type
//! [`SortFields`] registry that maps each sortable column to a typed key.

use crate::error::{PageError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Direction of a single-column sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

impl SortDirection {
    /// Interpret a loose direction keyword
    ///
    /// `"desc"` in any case is descending, everything else is ascending.
    ///
    /// # Examples
    /// ```
    /// use paged_query::SortDirection;
    ///
    /// assert_eq!(SortDirection::from_keyword("DESC"), SortDirection::Descending);
    /// assert_eq!(SortDirection::from_keyword("asc"), SortDirection::Ascending);
    /// assert_eq!(SortDirection::from_keyword(""), SortDirection::Ascending);
    /// ```
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ASC"),
            SortDirection::Descending => write!(f, "DESC"),
        }
    }
}

/// A parsed sort request: one column and a direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `column`
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `column`
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Parse `name [ASC|DESC]`
    ///
    /// Returns `None` when no column name is left, which callers treat as
    /// "keep the source order".
    ///
    /// # Examples
    /// ```
    /// use paged_query::{SortDirection, SortSpec};
    ///
    /// let spec = SortSpec::parse("Age DESC").unwrap();
    /// assert_eq!(spec.column, "Age");
    /// assert_eq!(spec.direction, SortDirection::Descending);
    ///
    /// assert_eq!(SortSpec::parse("Name"), Some(SortSpec::asc("Name")));
    /// assert_eq!(SortSpec::parse("   "), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        let (column, direction) = match trimmed.rsplit_once(char::is_whitespace) {
            Some((name, keyword)) if keyword.eq_ignore_ascii_case("desc") => {
                (name.trim_end(), SortDirection::Descending)
            }
            Some((name, keyword)) if keyword.eq_ignore_ascii_case("asc") => {
                (name.trim_end(), SortDirection::Ascending)
            }
            _ if trimmed.eq_ignore_ascii_case("desc") || trimmed.eq_ignore_ascii_case("asc") => {
                ("", SortDirection::Ascending)
            }
            _ => (trimmed, SortDirection::Ascending),
        };

        if column.is_empty() {
            return None;
        }

        Some(Self {
            column: column.to_string(),
            direction,
        })
    }

    /// Parse a column string, letting a separate direction argument win
    ///
    /// # Examples
    /// ```
    /// use paged_query::{SortDirection, SortSpec};
    ///
    /// let spec = SortSpec::resolve("Age", Some("desc")).unwrap();
    /// assert_eq!(spec.direction, SortDirection::Descending);
    ///
    /// let spec = SortSpec::resolve("Age DESC", Some("asc")).unwrap();
    /// assert_eq!(spec.direction, SortDirection::Ascending);
    /// ```
    pub fn resolve(raw: &str, direction: Option<&str>) -> Option<Self> {
        let mut spec = Self::parse(raw)?;
        if let Some(keyword) = direction {
            spec.direction = SortDirection::from_keyword(keyword);
        }
        Some(spec)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Ascending comparator for one named member of `T`
pub struct KeySelector<T> {
    name: Arc<str>,
    compare: Arc<CompareFn<T>>,
}

impl<T> KeySelector<T> {
    /// Selector comparing the keys produced by `key`
    pub fn new<K, F>(name: &str, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::with_comparator(name, move |a, b| key(a).cmp(&key(b)))
    }

    /// Selector backed by an arbitrary comparator
    pub fn with_comparator<F>(name: &str, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            compare: Arc::new(compare),
        }
    }

    /// Member name this selector was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compare two elements in the given direction
    pub fn compare(&self, a: &T, b: &T, direction: SortDirection) -> Ordering {
        direction.apply((self.compare)(a, b))
    }
}

impl<T> Clone for KeySelector<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<T> fmt::Debug for KeySelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySelector")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of the columns a type can be sorted by
///
/// # Examples
/// ```
/// use paged_query::{SortDirection, SortFields};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let fields = SortFields::new()
///     .field("Name", |p: &Person| p.name.clone())
///     .field("Age", |p: &Person| p.age);
///
/// let age = fields.resolve("Age").unwrap();
/// let young = Person { name: "a".into(), age: 1 };
/// let old = Person { name: "b".into(), age: 9 };
/// assert!(age.compare(&young, &old, SortDirection::Ascending).is_lt());
/// assert!(fields.resolve("Height").is_err());
/// ```
pub struct SortFields<T> {
    fields: HashMap<String, KeySelector<T>>,
}

impl<T> SortFields<T> {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Register a column whose key implements `Ord`
    pub fn field<K, F>(mut self, name: &str, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.fields
            .insert(name.to_string(), KeySelector::new(name, key));
        self
    }

    /// Register a column with a custom comparator
    ///
    /// Use this for keys without a total order, such as floats.
    pub fn field_by<F>(mut self, name: &str, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.fields
            .insert(name.to_string(), KeySelector::with_comparator(name, compare));
        self
    }

    /// Look up a column by exact name
    pub fn resolve(&self, name: &str) -> Result<KeySelector<T>> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| PageError::NotFound {
                member: name.to_string(),
            })
    }

    /// Whether `name` is a registered column
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Registered column names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<T> Default for SortFields<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SortFields<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fields.keys()).finish()
    }
}

/// Types that carry a process-wide sort registry
///
/// Implementors usually build the registry once behind a `OnceLock`:
///
/// ```
/// use paged_query::{SortFields, Sortable};
/// use std::sync::OnceLock;
///
/// struct Order {
///     id: u64,
/// }
///
/// impl Sortable for Order {
///     fn sort_fields() -> &'static SortFields<Self> {
///         static FIELDS: OnceLock<SortFields<Order>> = OnceLock::new();
///         FIELDS.get_or_init(|| SortFields::new().field("Id", |o: &Order| o.id))
///     }
/// }
///
/// assert!(Order::sort_fields().contains("Id"));
/// ```
pub trait Sortable: Sized + 'static {
    fn sort_fields() -> &'static SortFields<Self>;
}
