//! Tour body and path-parameter validation.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::prelude::DateTimeUtc;
use serde::Deserialize;

use entity::tour::Difficulty;

use crate::model::tour::{CreateTourParams, UpdateTourParams};

use super::FieldError;

const NAME_MAX_LEN: usize = 100;
const SUMMARY_MAX_LEN: usize = 500;
const DESCRIPTION_MAX_LEN: usize = 5000;

/// Declarative shape of a create-tour body.
///
/// Every field is optional at the serde level so that missing required
/// fields surface as per-field errors instead of a single opaque
/// deserialization failure; unknown keys are still rejected outright.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CreateTourBody {
    name: Option<String>,
    duration: Option<f64>,
    max_group_size: Option<f64>,
    difficulty: Option<String>,
    ratings_average: Option<f64>,
    ratings_quantity: Option<f64>,
    price: Option<f64>,
    price_discount: Option<f64>,
    summary: Option<String>,
    description: Option<String>,
    image_cover: Option<String>,
    images: Option<Vec<String>>,
    start_dates: Option<Vec<String>>,
    secret_tour: Option<bool>,
}

/// Declarative shape of a patch-tour body. Same fields as create, but
/// nothing is required; present fields are still fully validated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PatchTourBody {
    name: Option<String>,
    duration: Option<f64>,
    max_group_size: Option<f64>,
    difficulty: Option<String>,
    ratings_average: Option<f64>,
    ratings_quantity: Option<f64>,
    price: Option<f64>,
    price_discount: Option<f64>,
    summary: Option<String>,
    description: Option<String>,
    image_cover: Option<String>,
    images: Option<Vec<String>>,
    start_dates: Option<Vec<String>>,
    secret_tour: Option<bool>,
}

/// Validates a create-tour body into typed creation parameters.
///
/// # Arguments
/// - `body` - Raw JSON body as received
///
/// # Returns
/// - `Ok(CreateTourParams)` - Validated parameters ready for the service
/// - `Err(Vec<FieldError>)` - Every problem found in the body
pub fn parse_create_body(body: serde_json::Value) -> Result<CreateTourParams, Vec<FieldError>> {
    let body: CreateTourBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();

    let name = match body.name {
        Some(name) if !name.trim().is_empty() && name.len() <= NAME_MAX_LEN => Some(name),
        Some(_) => {
            errors.push(FieldError::new(
                "name",
                format!("A tour name must have between 1 and {NAME_MAX_LEN} characters"),
            ));
            None
        }
        None => {
            errors.push(FieldError::new("name", "A tour must have a name"));
            None
        }
    };

    let duration = require_positive_integer(body.duration, "duration", "A tour must have a duration", &mut errors);
    let max_group_size = require_positive_integer(
        body.max_group_size,
        "maxGroupSize",
        "A tour must have a group size",
        &mut errors,
    );

    let difficulty = match body.difficulty.as_deref() {
        Some(value) => match parse_difficulty(value) {
            Some(difficulty) => Some(difficulty),
            None => {
                errors.push(FieldError::new(
                    "difficulty",
                    "Difficulty is either: easy, medium, difficult",
                ));
                None
            }
        },
        None => {
            errors.push(FieldError::new("difficulty", "A tour must have a difficulty"));
            None
        }
    };

    let ratings_average = match body.ratings_average {
        Some(value) if (0.0..=5.0).contains(&value) => Some(value),
        Some(_) => {
            errors.push(FieldError::new(
                "ratingsAverage",
                "ratingsAverage must be between 0 and 5",
            ));
            None
        }
        None => None,
    };

    let ratings_quantity = match body.ratings_quantity {
        Some(value) if value >= 0.0 && value.fract() == 0.0 => Some(value as i32),
        Some(_) => {
            errors.push(FieldError::new(
                "ratingsQuantity",
                "ratingsQuantity must be a non-negative integer",
            ));
            None
        }
        None => None,
    };

    let price = match body.price {
        Some(value) if value > 0.0 => Some(value),
        Some(_) => {
            errors.push(FieldError::new("price", "price must be a positive number"));
            None
        }
        None => {
            errors.push(FieldError::new("price", "A tour must have a price"));
            None
        }
    };

    let price_discount = match body.price_discount {
        Some(value) if value >= 0.0 => Some(value),
        Some(_) => {
            errors.push(FieldError::new(
                "priceDiscount",
                "priceDiscount must be a non-negative number",
            ));
            None
        }
        None => None,
    };

    if let (Some(price), Some(discount)) = (price, price_discount) {
        if let Some(error) = price_discount_error(price, discount) {
            errors.push(error);
        }
    }

    let summary = match body.summary {
        Some(summary) if !summary.trim().is_empty() && summary.len() <= SUMMARY_MAX_LEN => {
            Some(summary)
        }
        Some(_) => {
            errors.push(FieldError::new(
                "summary",
                format!("A tour summary must have at most {SUMMARY_MAX_LEN} characters"),
            ));
            None
        }
        None => {
            errors.push(FieldError::new("summary", "A tour must have a summary"));
            None
        }
    };

    if let Some(description) = &body.description {
        if description.len() > DESCRIPTION_MAX_LEN {
            errors.push(FieldError::new(
                "description",
                format!("A tour description must have at most {DESCRIPTION_MAX_LEN} characters"),
            ));
        }
    }

    let image_cover = match body.image_cover {
        Some(cover) if !cover.trim().is_empty() => Some(cover),
        _ => {
            errors.push(FieldError::new("imageCover", "A tour must have a cover image"));
            None
        }
    };

    let start_dates = parse_start_dates(body.start_dates, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CreateTourParams {
        name: name.unwrap_or_default(),
        duration: duration.unwrap_or_default(),
        max_group_size: max_group_size.unwrap_or_default(),
        difficulty: difficulty.unwrap_or(Difficulty::Easy),
        ratings_average,
        ratings_quantity,
        price: price.unwrap_or_default(),
        price_discount,
        summary: summary.unwrap_or_default(),
        description: body.description,
        image_cover: image_cover.unwrap_or_default(),
        images: body.images.unwrap_or_default(),
        start_dates: start_dates.unwrap_or_default(),
        secret_tour: body.secret_tour.unwrap_or(false),
    })
}

/// Validates a patch-tour body into typed update parameters.
///
/// All fields are optional; the cross-field discount rule is re-checked in
/// the service against the stored document once the patch is merged.
pub fn parse_patch_body(body: serde_json::Value) -> Result<UpdateTourParams, Vec<FieldError>> {
    let body: PatchTourBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();

    let name = match body.name {
        Some(name) if !name.trim().is_empty() && name.len() <= NAME_MAX_LEN => Some(name),
        Some(_) => {
            errors.push(FieldError::new(
                "name",
                format!("A tour name must have between 1 and {NAME_MAX_LEN} characters"),
            ));
            None
        }
        None => None,
    };

    let duration = optional_positive_integer(body.duration, "duration", &mut errors);
    let max_group_size = optional_positive_integer(body.max_group_size, "maxGroupSize", &mut errors);

    let difficulty = match body.difficulty.as_deref() {
        Some(value) => match parse_difficulty(value) {
            Some(difficulty) => Some(difficulty),
            None => {
                errors.push(FieldError::new(
                    "difficulty",
                    "Difficulty is either: easy, medium, difficult",
                ));
                None
            }
        },
        None => None,
    };

    let ratings_average = match body.ratings_average {
        Some(value) if (0.0..=5.0).contains(&value) => Some(value),
        Some(_) => {
            errors.push(FieldError::new(
                "ratingsAverage",
                "ratingsAverage must be between 0 and 5",
            ));
            None
        }
        None => None,
    };

    let ratings_quantity = match body.ratings_quantity {
        Some(value) if value >= 0.0 && value.fract() == 0.0 => Some(value as i32),
        Some(_) => {
            errors.push(FieldError::new(
                "ratingsQuantity",
                "ratingsQuantity must be a non-negative integer",
            ));
            None
        }
        None => None,
    };

    let price = match body.price {
        Some(value) if value > 0.0 => Some(value),
        Some(_) => {
            errors.push(FieldError::new("price", "price must be a positive number"));
            None
        }
        None => None,
    };

    let price_discount = match body.price_discount {
        Some(value) if value >= 0.0 => Some(value),
        Some(_) => {
            errors.push(FieldError::new(
                "priceDiscount",
                "priceDiscount must be a non-negative number",
            ));
            None
        }
        None => None,
    };

    if let (Some(price), Some(discount)) = (price, price_discount) {
        if let Some(error) = price_discount_error(price, discount) {
            errors.push(error);
        }
    }

    let summary = match body.summary {
        Some(summary) if !summary.trim().is_empty() && summary.len() <= SUMMARY_MAX_LEN => {
            Some(summary)
        }
        Some(_) => {
            errors.push(FieldError::new(
                "summary",
                format!("A tour summary must have at most {SUMMARY_MAX_LEN} characters"),
            ));
            None
        }
        None => None,
    };

    if let Some(description) = &body.description {
        if description.len() > DESCRIPTION_MAX_LEN {
            errors.push(FieldError::new(
                "description",
                format!("A tour description must have at most {DESCRIPTION_MAX_LEN} characters"),
            ));
        }
    }

    let image_cover = match body.image_cover {
        Some(cover) if !cover.trim().is_empty() => Some(cover),
        Some(_) => {
            errors.push(FieldError::new("imageCover", "A tour must have a cover image"));
            None
        }
        None => None,
    };

    let start_dates = parse_start_dates(body.start_dates, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateTourParams {
        name,
        duration,
        max_group_size,
        difficulty,
        ratings_average,
        ratings_quantity,
        price,
        price_discount,
        summary,
        description: body.description,
        image_cover,
        images: body.images,
        start_dates,
        secret_tour: body.secret_tour,
    })
}

/// The cross-field discount rule: a discount equal to or above the price
/// would make the tour free or worse.
pub fn price_discount_error(price: f64, discount: f64) -> Option<FieldError> {
    if discount >= price {
        Some(FieldError::new(
            "priceDiscount",
            "Discount price should be less than regular price",
        ))
    } else {
        None
    }
}

/// Parses the `{id}` path segment of tour routes.
pub fn parse_tour_id(raw: &str) -> Result<i32, Vec<FieldError>> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(vec![FieldError::new("id", "Invalid tour ID")]),
    }
}

/// Parses the `{year}` path segment of the monthly-plan route.
pub fn parse_plan_year(raw: &str) -> Result<i32, Vec<FieldError>> {
    match raw.parse::<i32>() {
        Ok(year) if (1000..=9999).contains(&year) => Ok(year),
        _ => Err(vec![FieldError::new("year", "Year must be a valid 4-digit year")]),
    }
}

fn parse_difficulty(value: &str) -> Option<Difficulty> {
    match value {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "difficult" => Some(Difficulty::Difficult),
        _ => None,
    }
}

fn require_positive_integer(
    value: Option<f64>,
    path: &str,
    missing_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i32> {
    match value {
        Some(v) if v > 0.0 && v.fract() == 0.0 && v <= i32::MAX as f64 => Some(v as i32),
        Some(_) => {
            errors.push(FieldError::new(path, format!("{path} must be a positive integer")));
            None
        }
        None => {
            errors.push(FieldError::new(path, missing_message));
            None
        }
    }
}

fn optional_positive_integer(
    value: Option<f64>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i32> {
    match value {
        Some(v) if v > 0.0 && v.fract() == 0.0 && v <= i32::MAX as f64 => Some(v as i32),
        Some(_) => {
            errors.push(FieldError::new(path, format!("{path} must be a positive integer")));
            None
        }
        None => None,
    }
}

/// Parses start dates given either as RFC 3339 timestamps or bare
/// `YYYY-MM-DD` dates, which are taken as midnight UTC.
fn parse_start_dates(
    raw: Option<Vec<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<DateTimeUtc>> {
    let raw = raw?;
    let mut dates = Vec::with_capacity(raw.len());
    let mut failed = false;

    for (i, value) in raw.iter().enumerate() {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            dates.push(parsed.with_timezone(&Utc));
        } else if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            dates.push(DateTime::from_naive_utc_and_offset(
                date.and_hms_opt(0, 0, 0).unwrap_or_default(),
                Utc,
            ));
        } else {
            errors.push(FieldError::new(
                format!("startDates.{i}"),
                format!("startDates.{i} must be a valid date"),
            ));
            failed = true;
        }
    }

    if failed {
        None
    } else {
        Some(dates)
    }
}
