use serde_json::Value;
use validator::ValidateLength;

/// One link of a validation chain.
pub type Step<I, E> = fn(&I) -> Result<(), E>;

/// Runs `steps` in order, stopping at the first failure.
pub fn run<I, E>(steps: &[Step<I, E>], input: &I) -> Result<(), E> {
    steps.iter().try_for_each(|step| step(input))
}

/// A field counts as present text only when it is a non-empty JSON string.
pub fn has_text(value: &Option<Value>) -> bool {
    text(value).is_some_and(|text| text.validate_length(Some(1), None, None))
}

pub fn text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

/// Reads an optional body id. Absent, `null` and `""` mean "not supplied";
/// a non-string id is kept in its JSON form so it can never match a route.
pub fn supplied_id(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) if id.is_empty() => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Classifies a JSON value as an integer greater than zero. Floats with no
/// fractional part count, `10.5`, strings and booleans do not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= u64::MAX as f64)
                .map(|n| n as u64)
        }),
        _ => None,
    }
    .filter(|n| *n > 0)
}
