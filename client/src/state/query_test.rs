use super::*;

#[test]
fn default_query_uses_form_defaults() {
    let query = SearchQuery::default();
    assert!(query.topic.is_empty());
    assert_eq!(query.max_results, 10);
    assert_eq!(query.years, 5);
}

#[test]
fn from_form_trims_topic() {
    let query = SearchQuery::from_form("  transformers ", 10, 5).unwrap();
    assert_eq!(query, SearchQuery { topic: "transformers".to_owned(), max_results: 10, years: 5 });
}

#[test]
fn from_form_rejects_blank_topic() {
    assert_eq!(SearchQuery::from_form("", 10, 5), None);
    assert_eq!(SearchQuery::from_form("   ", 10, 5), None);
}

#[test]
fn from_form_clamps_limits() {
    let query = SearchQuery::from_form("t", 0, 99).unwrap();
    assert_eq!(query.max_results, 1);
    assert_eq!(query.years, 20);
    let query = SearchQuery::from_form("t", 51, 0).unwrap();
    assert_eq!(query.max_results, 50);
    assert_eq!(query.years, 1);
}

#[test]
fn parse_bounded_accepts_in_range_values() {
    assert_eq!(parse_bounded("25", &MAX_RESULTS_RANGE, 10), 25);
    assert_eq!(parse_bounded(" 7 ", &YEARS_RANGE, 5), 7);
}

#[test]
fn parse_bounded_clamps_out_of_range_values() {
    assert_eq!(parse_bounded("500", &MAX_RESULTS_RANGE, 10), 50);
    assert_eq!(parse_bounded("0", &MAX_RESULTS_RANGE, 10), 1);
    assert_eq!(parse_bounded("-3", &YEARS_RANGE, 5), 1);
}

#[test]
fn parse_bounded_keeps_previous_on_garbage() {
    assert_eq!(parse_bounded("", &MAX_RESULTS_RANGE, 12), 12);
    assert_eq!(parse_bounded("ten", &YEARS_RANGE, 4), 4);
    assert_eq!(parse_bounded("2.5", &YEARS_RANGE, 4), 4);
}
