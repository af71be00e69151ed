use super::*;

use serde_json::json;

use entity::tour::Difficulty;

use crate::validation::tour::parse_create_body;

fn valid_body() -> serde_json::Value {
    json!({
        "name": "The Forest Hiker",
        "duration": 5,
        "maxGroupSize": 25,
        "difficulty": "easy",
        "price": 397.0,
        "summary": "Breathtaking hike through the Canadian Banff National Park",
        "imageCover": "tour-1-cover.jpg",
    })
}

#[test]
fn accepts_minimal_valid_body() {
    let params = parse_create_body(valid_body()).unwrap();

    assert_eq!(params.name, "The Forest Hiker");
    assert_eq!(params.duration, 5);
    assert_eq!(params.max_group_size, 25);
    assert_eq!(params.difficulty, Difficulty::Easy);
    assert_eq!(params.price, 397.0);
    assert!(params.images.is_empty());
    assert!(params.start_dates.is_empty());
    assert!(!params.secret_tour);
}

#[test]
fn accepts_optional_fields() {
    let mut body = valid_body();
    body["ratingsAverage"] = json!(4.7);
    body["ratingsQuantity"] = json!(37);
    body["priceDiscount"] = json!(100.0);
    body["description"] = json!("A longer description");
    body["images"] = json!(["tour-1-1.jpg", "tour-1-2.jpg"]);
    body["startDates"] = json!(["2026-04-25", "2026-07-20T09:00:00Z"]);
    body["secretTour"] = json!(true);

    let params = parse_create_body(body).unwrap();

    assert_eq!(params.ratings_average, Some(4.7));
    assert_eq!(params.ratings_quantity, Some(37));
    assert_eq!(params.price_discount, Some(100.0));
    assert_eq!(params.images.len(), 2);
    assert_eq!(params.start_dates.len(), 2);
    assert!(params.secret_tour);
}

#[test]
fn rejects_missing_name() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("name");

    assert_single_error(parse_create_body(body), "name", "A tour must have a name");
}

#[test]
fn rejects_missing_duration() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("duration");

    assert_single_error(
        parse_create_body(body),
        "duration",
        "A tour must have a duration",
    );
}

#[test]
fn rejects_missing_group_size() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("maxGroupSize");

    assert_single_error(
        parse_create_body(body),
        "maxGroupSize",
        "A tour must have a group size",
    );
}

#[test]
fn rejects_missing_difficulty() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("difficulty");

    assert_single_error(
        parse_create_body(body),
        "difficulty",
        "A tour must have a difficulty",
    );
}

#[test]
fn rejects_unknown_difficulty() {
    let mut body = valid_body();
    body["difficulty"] = json!("impossible");

    assert_single_error(
        parse_create_body(body),
        "difficulty",
        "Difficulty is either: easy, medium, difficult",
    );
}

#[test]
fn rejects_missing_price() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("price");

    assert_single_error(parse_create_body(body), "price", "A tour must have a price");
}

#[test]
fn rejects_missing_summary() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("summary");

    assert_single_error(
        parse_create_body(body),
        "summary",
        "A tour must have a summary",
    );
}

#[test]
fn rejects_missing_cover_image() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("imageCover");

    assert_single_error(
        parse_create_body(body),
        "imageCover",
        "A tour must have a cover image",
    );
}

#[test]
fn rejects_rating_out_of_bounds() {
    let mut body = valid_body();
    body["ratingsAverage"] = json!(5.1);

    assert_single_error(
        parse_create_body(body),
        "ratingsAverage",
        "ratingsAverage must be between 0 and 5",
    );
}

#[test]
fn rejects_fractional_ratings_quantity() {
    let mut body = valid_body();
    body["ratingsQuantity"] = json!(3.5);

    assert_single_error(
        parse_create_body(body),
        "ratingsQuantity",
        "ratingsQuantity must be a non-negative integer",
    );
}

#[test]
fn rejects_negative_discount() {
    let mut body = valid_body();
    body["priceDiscount"] = json!(-10.0);

    assert_single_error(
        parse_create_body(body),
        "priceDiscount",
        "priceDiscount must be a non-negative number",
    );
}

#[test]
fn rejects_discount_equal_to_price() {
    let mut body = valid_body();
    body["priceDiscount"] = json!(397.0);

    assert_single_error(
        parse_create_body(body),
        "priceDiscount",
        "Discount price should be less than regular price",
    );
}

#[test]
fn rejects_discount_above_price() {
    let mut body = valid_body();
    body["priceDiscount"] = json!(500.0);

    assert_single_error(
        parse_create_body(body),
        "priceDiscount",
        "Discount price should be less than regular price",
    );
}

#[test]
fn rejects_invalid_start_date_with_indexed_path() {
    let mut body = valid_body();
    body["startDates"] = json!(["2026-04-25", "not-a-date"]);

    assert_single_error(
        parse_create_body(body),
        "startDates.1",
        "startDates.1 must be a valid date",
    );
}

#[test]
fn rejects_unknown_keys() {
    let mut body = valid_body();
    body["slug"] = json!("the-forest-hiker");

    let errors = parse_create_body(body).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "");
    assert!(errors[0].message.contains("unknown field"));
}

#[test]
fn collects_all_missing_required_fields() {
    let errors = parse_create_body(json!({})).unwrap_err();

    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"name"));
    assert!(paths.contains(&"duration"));
    assert!(paths.contains(&"maxGroupSize"));
    assert!(paths.contains(&"difficulty"));
    assert!(paths.contains(&"price"));
    assert!(paths.contains(&"summary"));
    assert!(paths.contains(&"imageCover"));
}
