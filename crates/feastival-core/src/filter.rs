//! Filtering operations over the calendar dataset.
//!
//! Dataset keys are date labels of the form `yyyy-MM-dd`. Both operations
//! compare filter strings against a label's *day portion*: the substring
//! after the first hyphen (`MM-dd` for well-formed labels). This means a
//! filter of `"02"` selects all of February, `"04-15"` selects exactly
//! April 15th, and `"05-0"` selects May 1st through 9th.
//!
//! Matching is a plain byte-wise, case-sensitive prefix comparison against
//! the day portion only. The month-name-free shape of these filters is part
//! of the dataset's public contract and must not be replaced with
//! month-aware matching.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

/// The calendar dataset: date label (`yyyy-MM-dd`) to event names.
///
/// A sorted map keeps iteration and serialization in ascending date order,
/// since lexicographic order of `yyyy-MM-dd` labels is chronological order.
pub type Dataset = BTreeMap<String, Vec<String>>;

/// Format of range bounds and of range-result keys.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the per-day filter string used when expanding a range.
const DAY_FORMAT: &str = "%m-%d";

/// A specialized Result type for filtering operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur during filtering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A range bound failed to parse as a calendar date.
    #[error("invalid date '{value}': expected a calendar date in yyyy-mm-dd format")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },
}

impl FilterError {
    /// Creates an invalid date error.
    pub fn invalid_date(value: impl Into<String>) -> Self {
        FilterError::InvalidDate {
            value: value.into(),
        }
    }
}

/// Returns the day portion of a date label: everything after the first hyphen.
///
/// A label without a hyphen has an empty day portion, so it is matched only
/// by the empty filter.
pub fn day_portion(label: &str) -> &str {
    match label.split_once('-') {
        Some((_, rest)) => rest,
        None => "",
    }
}

/// Returns the subset of `data` whose day portion starts with `pattern`.
///
/// The empty pattern matches every entry; a pattern matching nothing yields
/// an empty map. Values are copied unchanged.
pub fn filter(data: &Dataset, pattern: &str) -> Dataset {
    data.iter()
        .filter(|(label, _)| day_portion(label).starts_with(pattern))
        .map(|(label, names)| (label.clone(), names.clone()))
        .collect()
}

/// Aggregates event names for every calendar day from `start` to `end`
/// inclusive.
///
/// Both bounds must be calendar dates in `yyyy-mm-dd` format. Each day in
/// the range produces one result entry keyed by the full date, holding the
/// flattened event names of every dataset entry whose day portion matches
/// that day's `MM-dd` filter. Days with no matches still produce an entry
/// with an empty list. A start after the end yields an empty map.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDate`] if either bound is not a valid
/// calendar date (wrong shape, or an impossible date like `2025-02-31`).
pub fn filter_range(data: &Dataset, start: &str, end: &str) -> FilterResult<Dataset> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    let mut result = Dataset::new();
    for date in start.iter_days() {
        if date > end {
            break;
        }
        let matched = filter(data, &date.format(DAY_FORMAT).to_string());
        let names: Vec<String> = matched.into_values().flatten().collect();
        result.insert(date.format(DATE_FORMAT).to_string(), names);
    }

    Ok(result)
}

/// Parses a range bound, mapping parse failure to [`FilterError::InvalidDate`].
fn parse_date(value: &str) -> FilterResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FilterError::invalid_date(value))
}
