//! Subcommand implementations.
//!
//! Each command returns the text to print; `main` owns stdout and the
//! exit code.

pub mod encode;
pub mod quote;
pub mod schedule;
pub mod validate;

use anyhow::Result;
use serde::Serialize;

/// Accepts either a full checkout URL or a bare query string and returns
/// the query part. Any `#fragment` is dropped.
pub fn query_part(input: &str) -> &str {
    let input = input.trim();
    let query = match input.split_once('?') {
        Some((_, query)) => query,
        None if input.contains('=') => input,
        None => "",
    };
    query.split_once('#').map_or(query, |(query, _)| query)
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_part() {
        assert_eq!(query_part("https://iftarbox.ca/checkout?box=family&type=one-day"), "box=family&type=one-day");
        assert_eq!(query_part("?box=family"), "box=family");
        assert_eq!(query_part("box=family"), "box=family");
        assert_eq!(query_part("/checkout?salad=2#summary"), "salad=2");
        assert_eq!(query_part("/checkout"), "");
        assert_eq!(query_part(""), "");
    }
}
