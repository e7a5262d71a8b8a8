//! Client-side evaluation of the table query.
//!
//! Used when a table is configured without server-side filtering: the
//! engine applies search, filters and sort to the records it was given.

use std::cmp::Ordering;

use super::Direction;
use super::FilterMap;
use super::Sort;
use crate::column::Column;
use crate::column::FilterKind;
use crate::model::Record;
use crate::model::Value;

/// Returns the records matching `search` and `filters`, ordered by `sort`.
///
/// Search is a case-insensitive substring match over the searchable
/// columns, or over every visible column when none is marked searchable.
/// Sorting is stable.
pub fn apply<'a>(
    records: &'a [Record],
    columns: &[Column],
    search: &str,
    filters: &FilterMap,
    sort: Option<&Sort>,
) -> Vec<&'a Record> {
    let needle = search.trim().to_lowercase();
    let search_columns = search_columns(columns);

    let mut matched: Vec<&Record> = records
        .iter()
        .filter(|record| matches_search(record, &search_columns, &needle))
        .filter(|record| matches_filters(record, columns, filters))
        .collect();

    if let Some(sort) = sort {
        matched.sort_by(|a, b| compare(a, b, sort));
    }
    matched
}

fn search_columns(columns: &[Column]) -> Vec<&str> {
    let marked: Vec<&str> = columns
        .iter()
        .filter(|c| c.searchable)
        .map(|c| c.key.as_str())
        .collect();
    if !marked.is_empty() {
        return marked;
    }
    columns
        .iter()
        .filter(|c| !c.hidden)
        .map(|c| c.key.as_str())
        .collect()
}

fn matches_search(record: &Record, keys: &[&str], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    keys.iter()
        .any(|key| record.display(key).to_lowercase().contains(needle))
}

fn matches_filters(record: &Record, columns: &[Column], filters: &FilterMap) -> bool {
    filters.iter().all(|(key, expected)| {
        let kind = columns
            .iter()
            .find(|c| c.key == key)
            .and_then(|c| c.filter_type)
            .unwrap_or(FilterKind::Select);
        let value = record.get(key).unwrap_or(&Value::Null);
        matches_filter(value, kind, expected)
    })
}

/// Tests a single field value against a filter value.
pub fn matches_filter(value: &Value, kind: FilterKind, expected: &str) -> bool {
    match kind {
        FilterKind::Select => value.to_string() == expected,
        FilterKind::Number => match (value.as_f64(), expected.trim().parse::<f64>()) {
            (Some(actual), Ok(expected)) => actual == expected,
            _ => false,
        },
        FilterKind::Date => match (value.as_date(), Value::from(expected).as_date()) {
            (Some(actual), Some(expected)) => actual == expected,
            _ => false,
        },
    }
}

fn compare(a: &Record, b: &Record, sort: &Sort) -> Ordering {
    let left = a.get(&sort.field).unwrap_or(&Value::Null);
    let right = b.get(&sort.field).unwrap_or(&Value::Null);
    let ordering = left.sort_cmp(right);
    match sort.direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}
