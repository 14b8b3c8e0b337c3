//! Search form values and their bounds.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::ops::RangeInclusive;

pub const MAX_RESULTS_RANGE: RangeInclusive<u32> = 1..=50;
pub const YEARS_RANGE: RangeInclusive<u32> = 1..=20;
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_YEARS: u32 = 5;

/// One search submission: topic plus result/age limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub topic: String,
    pub max_results: u32,
    pub years: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self { topic: String::new(), max_results: DEFAULT_MAX_RESULTS, years: DEFAULT_YEARS }
    }
}

impl SearchQuery {
    /// Build a query from raw form values, trimming the topic and clamping
    /// both limits into range. Returns `None` when the topic is blank.
    pub fn from_form(topic: &str, max_results: u32, years: u32) -> Option<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return None;
        }
        Some(Self {
            topic: topic.to_owned(),
            max_results: clamp_to(max_results, &MAX_RESULTS_RANGE),
            years: clamp_to(years, &YEARS_RANGE),
        })
    }
}

/// Parse a number input's raw text into `range`.
///
/// Out-of-range values are clamped. Text that is not a number keeps
/// `previous`.
pub fn parse_bounded(raw: &str, range: &RangeInclusive<u32>, previous: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => {
            let lo = i64::from(*range.start());
            let hi = i64::from(*range.end());
            u32::try_from(value.clamp(lo, hi)).unwrap_or(previous)
        }
        Err(_) => previous,
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
