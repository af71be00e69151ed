use super::*;

mod create_body;
mod fields;
mod sort;

/// Builds decoded query pairs from `key=value` literals.
fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Asserts a result failed with exactly one error carrying the given
/// path and message.
fn assert_single_error<T: std::fmt::Debug>(
    result: Result<T, Vec<FieldError>>,
    path: &str,
    message: &str,
) {
    let errors = result.expect_err("expected validation to fail");
    assert_eq!(errors.len(), 1, "expected one error, got {errors:?}");
    assert_eq!(errors[0].path, path);
    assert_eq!(errors[0].message, message);
}
