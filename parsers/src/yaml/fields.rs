use geometry::{Float, Point3};
use serde_yaml::Value;

use super::SceneError;

fn invalid(field: &str, reason: &str) -> SceneError {
    SceneError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

pub(super) fn number(value: &Value, field: &str) -> Result<Float, SceneError> {
    value.as_f64().ok_or_else(|| invalid(field, "expected a number"))
}

pub(super) fn numbers(values: &[Value], field: &str) -> Result<Vec<Float>, SceneError> {
    values.iter().map(|v| number(v, field)).collect()
}

/// Exactly three numbers
pub(super) fn triple(value: &Value, field: &str) -> Result<[Float; 3], SceneError> {
    match value.as_sequence().map(|s| numbers(s, field)) {
        Some(Ok(v)) if v.len() == 3 => Ok([v[0], v[1], v[2]]),
        Some(Err(e)) => Err(e),
        _ => Err(invalid(field, "expected a list of three numbers")),
    }
}

pub(super) fn optional_number(item: &Value, field: &str) -> Result<Option<Float>, SceneError> {
    item.get(field).map(|v| number(v, field)).transpose()
}

pub(super) fn point(value: &Value, field: &str) -> Result<Point3, SceneError> {
    triple(value, field).map(Point3::from_array)
}

pub(super) fn string<'a>(value: &'a Value, field: &str) -> Result<&'a str, SceneError> {
    value.as_str().ok_or_else(|| invalid(field, "expected a string"))
}

pub(super) fn boolean(value: &Value, field: &str) -> Result<bool, SceneError> {
    value.as_bool().ok_or_else(|| invalid(field, "expected true or false"))
}

/// A field that must be present
pub(super) fn required<'a>(item: &'a Value, field: &'static str) -> Result<&'a Value, SceneError> {
    item.get(field).ok_or(SceneError::MissingField(field))
}

/// Numbers following the operation name of a transform step
pub(super) fn arguments<const N: usize>(
    args: &[Value],
    operation: &str,
) -> Result<[Float; N], SceneError> {
    let values = numbers(args, operation)?;
    values.try_into().map_err(|_| {
        invalid(
            operation,
            &format!("expected {} number{}", N, if N == 1 { "" } else { "s" }),
        )
    })
}
