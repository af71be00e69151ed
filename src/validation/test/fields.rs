use super::*;

use crate::validation::query::parse_tour_list_query;

#[test]
fn accepts_include_list() {
    let query = parse_tour_list_query(&pairs(&[("fields", "name,price,summary")])).unwrap();
    let selection = query.fields.unwrap();

    assert!(!selection.exclude);
    assert_eq!(selection.fields, vec!["name", "price", "summary"]);
}

#[test]
fn accepts_exclude_list() {
    let query = parse_tour_list_query(&pairs(&[("fields", "-images,-description")])).unwrap();
    let selection = query.fields.unwrap();

    assert!(selection.exclude);
    assert_eq!(selection.fields, vec!["images", "description"]);
}

#[test]
fn rejects_empty_value() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("fields", "")])),
        "fields",
        "Fields must be a non-empty string",
    );
}

#[test]
fn rejects_empty_entry() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("fields", "name,,price")])),
        "fields.1",
        "Fields must not contain empty values",
    );
}

#[test]
fn rejects_internal_fields() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("fields", "_id")])),
        "fields.0",
        "Field \"_id\" cannot be requested",
    );
}

#[test]
fn rejects_internal_fields_in_exclude_form() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("fields", "-__v")])),
        "fields.0",
        "Field \"__v\" cannot be requested",
    );
}

#[test]
fn rejects_unknown_field() {
    let errors = parse_tour_list_query(&pairs(&[("fields", "slug")])).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "fields.0");
    assert!(errors[0].message.starts_with("Fields must be one of: name, duration"));
}

#[test]
fn rejects_duplicate_field() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("fields", "name,name")])),
        "fields.1",
        "Field \"name\" is duplicated",
    );
}

#[test]
fn rejects_mixed_include_and_exclude() {
    assert_single_error(
        parse_tour_list_query(&pairs(&[("fields", "name,-images")])),
        "fields",
        "Fields cannot mix include and exclude values",
    );
}
