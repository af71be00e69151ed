//! Listing query validation and normalization.
//!
//! Parses the raw query-string pairs of `GET /api/v1/tours` into a typed
//! [`TourListQuery`]. Unknown keys, duplicated keys, malformed values, and
//! empty ranges are all rejected here; the data layer only ever sees
//! normalized, known-valid input.

use entity::tour::Difficulty;

use super::FieldError;

/// Fields a client may sort the listing by.
const SORTABLE_FIELDS: &[&str] = &["price", "ratingsAverage", "duration"];

/// Fields a client may select with `?fields=`.
const SELECTABLE_FIELDS: &[&str] = &[
    "name",
    "duration",
    "maxGroupSize",
    "difficulty",
    "ratingsAverage",
    "ratingsQuantity",
    "price",
    "priceDiscount",
    "summary",
    "description",
    "imageCover",
    "images",
    "createdAt",
    "startDates",
];

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// A validated, normalized tour listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct TourListQuery {
    pub page: u64,
    pub limit: u64,
    /// Sort tokens in `field` / `-field` form, minus-prefix meaning descending.
    pub sort: Option<Vec<String>>,
    pub fields: Option<FieldSelection>,
    pub difficulty: Option<Difficulty>,
    pub duration: Option<RangeFilter<i64>>,
    pub price: Option<RangeFilter<f64>>,
}

impl Default for TourListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: None,
            fields: None,
            difficulty: None,
            duration: None,
            price: None,
        }
    }
}

impl TourListQuery {
    /// Number of rows to skip for the requested page.
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// The canned query behind the top-5 alias route: five best-rated
    /// cheapest tours with a compact field selection.
    pub fn top_five() -> Self {
        Self {
            limit: 5,
            sort: Some(vec!["-ratingsAverage".to_string(), "price".to_string()]),
            fields: Some(FieldSelection {
                exclude: false,
                fields: ["name", "price", "ratingsAverage", "summary", "difficulty"]
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            }),
            ..Self::default()
        }
    }
}

/// A validated `?fields=` selection.
///
/// Either an include list (`fields=name,price`) or an exclude list
/// (`fields=-images,-description`); the two modes cannot be mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub exclude: bool,
    pub fields: Vec<String>,
}

/// A numeric filter: either an exact match or a range.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeFilter<T> {
    Exact(T),
    Range(RangeBounds<T>),
}

/// Range operators collected from bracketed query keys like `price[gte]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeBounds<T> {
    pub gt: Option<T>,
    pub gte: Option<T>,
    pub lt: Option<T>,
    pub lte: Option<T>,
}

impl<T: Copy + PartialOrd> RangeBounds<T> {
    /// Effective lower bound and whether it is inclusive.
    ///
    /// When both `gt` and `gte` are present the exclusive bound governs.
    pub fn lower(&self) -> Option<(T, bool)> {
        match (self.gt, self.gte) {
            (Some(v), _) => Some((v, false)),
            (None, Some(v)) => Some((v, true)),
            (None, None) => None,
        }
    }

    /// Effective upper bound and whether it is inclusive.
    pub fn upper(&self) -> Option<(T, bool)> {
        match (self.lt, self.lte) {
            (Some(v), _) => Some((v, false)),
            (None, Some(v)) => Some((v, true)),
            (None, None) => None,
        }
    }

    /// Whether at least one value can satisfy the range.
    ///
    /// Equal bounds are admissible only when both sides are inclusive;
    /// single-sided ranges are always valid.
    pub fn is_satisfiable(&self) -> bool {
        match (self.lower(), self.upper()) {
            (Some((lo, lo_inclusive)), Some((hi, hi_inclusive))) => {
                if lo_inclusive && hi_inclusive {
                    lo <= hi
                } else {
                    lo < hi
                }
            }
            _ => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.gt.is_none() && self.gte.is_none() && self.lt.is_none() && self.lte.is_none()
    }

    fn set(&mut self, op: &str, value: T) {
        match op {
            "gt" => self.gt = Some(value),
            "gte" => self.gte = Some(value),
            "lt" => self.lt = Some(value),
            "lte" => self.lte = Some(value),
            _ => unreachable!("operator is checked before parsing"),
        }
    }
}

/// Rejects any query string on routes that take none.
pub fn require_empty_query(pairs: &[(String, String)]) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = pairs
        .iter()
        .map(|(key, _)| {
            FieldError::new(
                key.clone(),
                format!("Unrecognized query parameter \"{key}\""),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parses and validates the raw query pairs of the tour listing route.
///
/// # Arguments
/// - `pairs` - Decoded query pairs in request order
///
/// # Returns
/// - `Ok(TourListQuery)` - Normalized query with defaults applied
/// - `Err(Vec<FieldError>)` - Every problem found, not just the first
pub fn parse_tour_list_query(pairs: &[(String, String)]) -> Result<TourListQuery, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut query = TourListQuery::default();

    let mut duration = RangeBounds::default();
    let mut duration_exact: Option<i64> = None;
    let mut price = RangeBounds::default();
    let mut price_exact: Option<f64> = None;

    let mut seen: Vec<&str> = Vec::new();

    for (key, value) in pairs {
        if seen.contains(&key.as_str()) {
            errors.push(FieldError::new(
                key.clone(),
                format!("{key} must be a single query parameter"),
            ));
            continue;
        }
        seen.push(key.as_str());

        let (base, op) = split_bracket_key(key);
        match (base, op) {
            ("page", None) => match parse_positive_integer(value) {
                Some(page) => query.page = page,
                None => errors.push(FieldError::new("page", "page must be a positive integer")),
            },
            ("limit", None) => match parse_positive_integer(value) {
                Some(limit) => query.limit = limit,
                None => errors.push(FieldError::new("limit", "limit must be a positive integer")),
            },
            ("sort", None) => match parse_sort(value) {
                Ok(tokens) => query.sort = Some(tokens),
                Err(sort_errors) => errors.extend(sort_errors),
            },
            ("fields", None) => match parse_fields(value) {
                Ok(selection) => query.fields = Some(selection),
                Err(field_errors) => errors.extend(field_errors),
            },
            ("difficulty", None) => match parse_difficulty(value) {
                Some(difficulty) => query.difficulty = Some(difficulty),
                None => errors.push(FieldError::new(
                    "difficulty",
                    "difficulty must be one of: easy, medium, difficult",
                )),
            },
            ("duration", None) => match parse_positive_integer(value) {
                Some(exact) => duration_exact = Some(exact as i64),
                None => errors.push(FieldError::new(
                    "duration",
                    "duration must be a positive integer",
                )),
            },
            ("price", None) => match parse_positive_number(value) {
                Some(exact) => price_exact = Some(exact),
                None => errors.push(FieldError::new("price", "price must be a positive number")),
            },
            ("duration", Some(op)) => {
                if !is_range_operator(op) {
                    errors.push(FieldError::new(
                        key.clone(),
                        format!("Unrecognized range operator \"{op}\""),
                    ));
                } else {
                    match parse_positive_integer(value) {
                        Some(bound) => duration.set(op, bound as i64),
                        None => errors.push(FieldError::new(
                            format!("duration.{op}"),
                            format!("duration.{op} must be a positive integer"),
                        )),
                    }
                }
            }
            ("price", Some(op)) => {
                if !is_range_operator(op) {
                    errors.push(FieldError::new(
                        key.clone(),
                        format!("Unrecognized range operator \"{op}\""),
                    ));
                } else {
                    match parse_positive_number(value) {
                        Some(bound) => price.set(op, bound),
                        None => errors.push(FieldError::new(
                            format!("price.{op}"),
                            format!("price.{op} must be a positive number"),
                        )),
                    }
                }
            }
            _ => errors.push(FieldError::new(
                key.clone(),
                format!("Unrecognized query parameter \"{key}\""),
            )),
        }
    }

    query.duration = combine_filter(duration_exact, duration, "duration", "Duration", &mut errors);
    query.price = combine_filter(price_exact, price, "price", "Price", &mut errors);

    if errors.is_empty() {
        Ok(query)
    } else {
        Err(errors)
    }
}

/// Merges the bare form and the bracketed operators of one numeric filter,
/// rejecting conflicts and unsatisfiable ranges.
fn combine_filter<T: Copy + PartialOrd>(
    exact: Option<T>,
    bounds: RangeBounds<T>,
    key: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<RangeFilter<T>> {
    match (exact, bounds.is_empty()) {
        (Some(_), false) => {
            errors.push(FieldError::new(
                key,
                format!("{key} cannot combine an exact value with range operators"),
            ));
            None
        }
        (Some(value), true) => Some(RangeFilter::Exact(value)),
        (None, false) => {
            if bounds.is_satisfiable() {
                Some(RangeFilter::Range(bounds))
            } else {
                errors.push(FieldError::new(
                    key,
                    format!("{label} range is invalid (lower bound must be less than upper bound)"),
                ));
                None
            }
        }
        (None, true) => None,
    }
}

/// Splits `duration[gte]` into `("duration", Some("gte"))`; keys without a
/// bracket pair come back unchanged.
fn split_bracket_key(key: &str) -> (&str, Option<&str>) {
    if let Some(open) = key.find('[') {
        if let Some(stripped) = key[open + 1..].strip_suffix(']') {
            return (&key[..open], Some(stripped));
        }
    }
    (key, None)
}

fn is_range_operator(op: &str) -> bool {
    matches!(op, "gt" | "gte" | "lt" | "lte")
}

fn parse_positive_integer(value: &str) -> Option<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 && !value.starts_with('+') => Some(n),
        _ => None,
    }
}

fn parse_positive_number(value: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(n) if n > 0.0 && n.is_finite() => Some(n),
        _ => None,
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

/// Parses `?sort=price:asc,ratingsAverage:desc` into normalized tokens
/// (`price`, `-ratingsAverage`).
fn parse_sort(value: &str) -> Result<Vec<String>, Vec<FieldError>> {
    if value.trim().is_empty() {
        return Err(vec![FieldError::new("sort", "Sort must be a non-empty string")]);
    }

    let mut errors = Vec::new();
    let mut tokens = Vec::new();
    let mut seen_fields: Vec<String> = Vec::new();

    for (i, entry) in value.split(',').enumerate() {
        let path = format!("sort.{i}");
        let entry = entry.trim();
        if entry.is_empty() {
            errors.push(FieldError::new(path, "Sort must not contain empty fields"));
            continue;
        }

        let Some((field, direction)) = entry.split_once(':') else {
            errors.push(FieldError::new(path, "Sort must use field:direction format"));
            continue;
        };

        if !SORTABLE_FIELDS.contains(&field) {
            errors.push(FieldError::new(
                path,
                format!(
                    "Sort fields must be one of: {}",
                    SORTABLE_FIELDS.join(", ")
                ),
            ));
            continue;
        }

        if seen_fields.iter().any(|f| f == field) {
            errors.push(FieldError::new(
                path,
                format!("Sort field \"{field}\" is duplicated"),
            ));
            continue;
        }
        seen_fields.push(field.to_string());

        match direction.to_ascii_lowercase().as_str() {
            "asc" => tokens.push(field.to_string()),
            "desc" => tokens.push(format!("-{field}")),
            _ => errors.push(FieldError::new(
                path,
                "Sort direction must be one of: asc, desc",
            )),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

/// Parses `?fields=name,price` (include) or `?fields=-images` (exclude).
fn parse_fields(value: &str) -> Result<FieldSelection, Vec<FieldError>> {
    if value.trim().is_empty() {
        return Err(vec![FieldError::new(
            "fields",
            "Fields must be a non-empty string",
        )]);
    }

    let mut errors = Vec::new();
    let mut includes: Vec<String> = Vec::new();
    let mut excludes: Vec<String> = Vec::new();

    for (i, entry) in value.split(',').enumerate() {
        let path = format!("fields.{i}");
        let entry = entry.trim();
        if entry.is_empty() {
            errors.push(FieldError::new(path, "Fields must not contain empty values"));
            continue;
        }

        let (name, exclude) = match entry.strip_prefix('-') {
            Some(name) => (name, true),
            None => (entry, false),
        };

        if name == "_id" || name == "__v" {
            errors.push(FieldError::new(
                path,
                format!("Field \"{name}\" cannot be requested"),
            ));
            continue;
        }

        if !SELECTABLE_FIELDS.contains(&name) {
            errors.push(FieldError::new(
                path,
                format!(
                    "Fields must be one of: {}",
                    SELECTABLE_FIELDS.join(", ")
                ),
            ));
            continue;
        }

        let bucket = if exclude { &mut excludes } else { &mut includes };
        if bucket.iter().any(|f| f == name) {
            errors.push(FieldError::new(
                path,
                format!("Field \"{name}\" is duplicated"),
            ));
            continue;
        }
        bucket.push(name.to_string());
    }

    if !includes.is_empty() && !excludes.is_empty() {
        errors.push(FieldError::new(
            "fields",
            "Fields cannot mix include and exclude values",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if excludes.is_empty() {
        Ok(FieldSelection {
            exclude: false,
            fields: includes,
        })
    } else {
        Ok(FieldSelection {
            exclude: true,
            fields: excludes,
        })
    }
}
