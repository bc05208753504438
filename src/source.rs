//! Ordered, countable sources
//!
//! [`OrderedSource`] is the contract the executor pages over. [`SliceSource`]
//! implements it for borrowed in-memory data.

use crate::error::{PageError, Result};
use crate::sort::{KeySelector, SortDirection, SortFields, Sortable};

/// Anything that can be counted, reordered by a named key and sliced
///
/// Implementations never mutate the receiver. `order_by` hands back a new
/// source with the ordering applied.
pub trait OrderedSource<T> {
    /// Total number of elements, ignoring any window
    fn count(&self) -> usize;

    /// Equivalent source ordered by `key`
    fn order_by(&self, key: &KeySelector<T>, direction: SortDirection) -> Self
    where
        Self: Sized;

    /// At most `take` elements after skipping `skip`, in current order
    fn slice(&self, skip: usize, take: usize) -> Vec<T>;

    /// Key selector for the member called `name`
    fn resolve_member(&self, name: &str) -> Result<KeySelector<T>>;
}

/// Source over a borrowed slice
///
/// Ordering permutes indices only. Elements are cloned when a slice is
/// materialized.
///
/// # Examples
/// ```
/// use paged_query::{OrderedSource, SliceSource, SortDirection, SortFields};
///
/// let fields = SortFields::new().field("Value", |v: &i32| *v);
/// let data = [3, 1, 2];
/// let source = SliceSource::new(&data).with_sort_fields(&fields);
///
/// let key = source.resolve_member("Value").unwrap();
/// let sorted = source.order_by(&key, SortDirection::Ascending);
/// assert_eq!(sorted.slice(0, 10), vec![1, 2, 3]);
/// assert_eq!(source.slice(1, 1), vec![1]);
/// ```
#[derive(Debug)]
pub struct SliceSource<'a, T> {
    items: &'a [T],
    order: Option<Vec<usize>>,
    fields: Option<&'a SortFields<T>>,
}

impl<'a, T> SliceSource<'a, T> {
    /// Source without a sort registry; every member lookup fails
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            order: None,
            fields: None,
        }
    }

    /// Attach the registry used to resolve sort columns
    pub fn with_sort_fields(mut self, fields: &'a SortFields<T>) -> Self {
        self.fields = Some(fields);
        self
    }

    fn positions(&self) -> Vec<usize> {
        match &self.order {
            Some(order) => order.clone(),
            None => (0..self.items.len()).collect(),
        }
    }
}

impl<'a, T: Sortable> SliceSource<'a, T> {
    /// Source that resolves columns through `T`'s own registry
    pub fn sortable(items: &'a [T]) -> Self {
        Self::new(items).with_sort_fields(T::sort_fields())
    }
}

impl<T> Clone for SliceSource<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            order: self.order.clone(),
            fields: self.fields,
        }
    }
}

impl<'a, T> From<&'a [T]> for SliceSource<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for SliceSource<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items.as_slice())
    }
}

impl<T: Clone> OrderedSource<T> for SliceSource<'_, T> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn order_by(&self, key: &KeySelector<T>, direction: SortDirection) -> Self {
        let mut order = self.positions();
        // sort_by is stable, ties keep their current relative order
        order.sort_by(|&a, &b| key.compare(&self.items[a], &self.items[b], direction));

        Self {
            items: self.items,
            order: Some(order),
            fields: self.fields,
        }
    }

    fn slice(&self, skip: usize, take: usize) -> Vec<T> {
        match &self.order {
            Some(order) => order
                .iter()
                .skip(skip)
                .take(take)
                .map(|&i| self.items[i].clone())
                .collect(),
            None => self.items.iter().skip(skip).take(take).cloned().collect(),
        }
    }

    fn resolve_member(&self, name: &str) -> Result<KeySelector<T>> {
        match self.fields {
            Some(fields) => fields.resolve(name),
            None => Err(PageError::NotFound {
                member: name.to_string(),
            }),
        }
    }
}
