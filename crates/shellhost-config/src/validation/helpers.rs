//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range_u64(
    errors: &mut Vec<String>,
    name: &str,
    value: u64,
    min: u64,
    max: u64,
) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Like [`validate_range_u64`], skipping unset values.
pub(crate) fn validate_optional_range(
    errors: &mut Vec<String>,
    name: &str,
    value: Option<u32>,
    min: u32,
    max: u32,
) {
    if let Some(value) = value {
        validate_range_u64(errors, name, value.into(), min.into(), max.into());
    }
}
