use super::*;

use crate::validation::query::parse_tour_list_query;

#[test]
fn accepts_single_field() {
    let query = parse_tour_list_query(&pairs(&[("sort", "price:asc")])).unwrap();

    assert_eq!(query.sort, Some(vec!["price".to_string()]));
}

#[test]
fn normalizes_descending_to_minus_prefix() {
    let query =
        parse_tour_list_query(&pairs(&[("sort", "ratingsAverage:desc,price:asc")])).unwrap();

    assert_eq!(
        query.sort,
        Some(vec!["-ratingsAverage".to_string(), "price".to_string()])
    );
}

#[test]
fn accepts_direction_in_any_case() {
    let query = parse_tour_list_query(&pairs(&[("sort", "price:DESC,duration:Asc")])).unwrap();

    assert_eq!(
        query.sort,
        Some(vec!["-price".to_string(), "duration".to_string()])
    );
}

#[test]
fn rejects_empty_value() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("sort", "")])),
        "sort",
        "Sort must be a non-empty string",
    );
}

#[test]
fn rejects_empty_entry_with_indexed_path() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("sort", "price:asc,,duration:desc")])),
        "sort.1",
        "Sort must not contain empty fields",
    );
}

#[test]
fn rejects_missing_direction() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("sort", "price")])),
        "sort.0",
        "Sort must use field:direction format",
    );
}

#[test]
fn rejects_unknown_field() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("sort", "name:asc")])),
        "sort.0",
        "Sort fields must be one of: price, ratingsAverage, duration",
    );
}

#[test]
fn rejects_duplicate_field() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("sort", "price:asc,price:desc")])),
        "sort.1",
        "Sort field \"price\" is duplicated",
    );
}

#[test]
fn rejects_unknown_direction() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("sort", "price:up")])),
        "sort.0",
        "Sort direction must be one of: asc, desc",
    );
}

#[test]
fn collects_errors_for_every_bad_entry() {
    let errors =
        parse_tour_list_query(&pairs(&[("sort", "name:asc,price:up")])).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].path, "sort.0");
    assert_eq!(errors[1].path, "sort.1");
}
