//! Property test generators for paging and sorting
//!
//! Strategies for paging parameters, sort column strings and sortable
//! records, including the boundary cases (empty sources, exact multiples,
//! last partial pages).

use crate::sort::{SortFields, Sortable};
use proptest::prelude::*;
use std::sync::OnceLock;

/// Record with one column of every common key type
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub score: f64,
}

impl Sortable for Record {
    fn sort_fields() -> &'static SortFields<Self> {
        static FIELDS: OnceLock<SortFields<Record>> = OnceLock::new();
        FIELDS.get_or_init(|| {
            SortFields::new()
                .field("Id", |r: &Record| r.id)
                .field("Name", |r: &Record| r.name.clone())
                .field_by("Score", |a: &Record, b: &Record| a.score.total_cmp(&b.score))
        })
    }
}

/// Generators for paging parameters
pub struct PagingGenerators;

impl PagingGenerators {
    /// Total item counts, weighted towards small and empty sources
    pub fn total() -> impl Strategy<Value = usize> {
        prop_oneof![
            1 => Just(0usize),
            4 => 1usize..50,
            1 => 50usize..500,
        ]
    }

    /// Non-zero page sizes
    pub fn page_size() -> impl Strategy<Value = usize> {
        prop_oneof![
            Just(1usize),
            Just(10usize),
            1usize..30,
        ]
    }

    /// (total, page_size, page) with `page` inside `1..=page_count`
    pub fn valid_request() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..200, Self::page_size()).prop_flat_map(|(total, page_size)| {
            let pages = total.div_ceil(page_size);
            (Just(total), Just(page_size), 1..=pages)
        })
    }

    /// (total, page_size, page) with `page` past the last page
    pub fn out_of_range_request() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..200, Self::page_size()).prop_flat_map(|(total, page_size)| {
            let pages = total.div_ceil(page_size);
            (Just(total), Just(page_size), pages + 1..pages + 10)
        })
    }

    /// (start, limit) offset pairs with a non-zero limit
    pub fn offset() -> impl Strategy<Value = (usize, usize)> {
        (0usize..500, 1usize..50)
    }
}

/// Generators for sort column strings and records
pub struct SortGenerators;

impl SortGenerators {
    /// Registered column names of [`Record`]
    pub fn column() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Id".to_string()),
            Just("Name".to_string()),
            Just("Score".to_string()),
        ]
    }

    /// Column names that are not registered
    pub fn unknown_column() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,15}".prop_filter("Unregistered column", |s| {
            !Record::sort_fields().contains(s)
                && !s.eq_ignore_ascii_case("asc")
                && !s.eq_ignore_ascii_case("desc")
        })
    }

    /// Column strings with a direction keyword in mixed case and spacing
    pub fn column_with_keyword() -> impl Strategy<Value = (String, String)> {
        (
            Self::column(),
            prop_oneof![
                Just("DESC"),
                Just("desc"),
                Just("Desc"),
                Just("ASC"),
                Just("asc"),
            ],
            prop_oneof![Just(" "), Just("  "), Just("\t")],
        )
            .prop_map(|(column, keyword, gap)| {
                (column.clone(), format!("{}{}{} ", column, gap, keyword))
            })
    }

    /// Records with distinct ids, names and scores
    pub fn distinct_records(max: usize) -> impl Strategy<Value = Vec<Record>> {
        prop::collection::hash_set(0u32..10_000, 0..=max).prop_map(|ids| {
            ids.into_iter()
                .map(|id| Record {
                    id,
                    name: format!("record-{:05}", id),
                    score: f64::from(id) / 4.0,
                })
                .collect()
        })
    }

    /// Records that may share keys
    pub fn records(max: usize) -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec((0u32..20, "[a-c]{1,2}", 0u32..5), 0..=max).prop_map(|rows| {
            rows.into_iter()
                .map(|(id, name, score)| Record {
                    id,
                    name,
                    score: f64::from(score),
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortSpec;

    proptest! {
        #[test]
        fn valid_requests_stay_in_range(
            (total, page_size, page) in PagingGenerators::valid_request()
        ) {
            prop_assert!(page >= 1);
            prop_assert!((page - 1) * page_size < total);
        }

        #[test]
        fn out_of_range_requests_start_past_the_end(
            (total, page_size, page) in PagingGenerators::out_of_range_request()
        ) {
            prop_assert!((page - 1) * page_size >= total);
        }

        #[test]
        fn keyword_columns_parse_back(
            (column, raw) in SortGenerators::column_with_keyword()
        ) {
            let spec = SortSpec::parse(&raw);
            prop_assert_eq!(spec.map(|s| s.column), Some(column));
        }

        #[test]
        fn distinct_records_have_unique_ids(
            records in SortGenerators::distinct_records(30)
        ) {
            let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), records.len());
        }
    }
}
