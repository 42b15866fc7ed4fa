use serde_json::{Map, Value};

use crate::errors::Rejection;

/// Incoming event payload.
///
/// Events arrive untyped; [`crate::TypedEvent::parse`] turns an object into
/// one of the supported kinds.
pub type EventJson = Value;

/// Invocation context passed alongside an event. Processors never read it.
pub type Context = Map<String, Value>;

/// Field map of an event that is known to be a JSON object.
pub type EventObject = Map<String, Value>;

/// Checks that every field in `names` is present, in order.
///
/// Reports only the first absent field.
pub fn require_fields(event: &EventObject, names: &[&'static str]) -> Result<(), Rejection> {
    for &name in names {
        if !event.contains_key(name) {
            return Err(Rejection::MissingField(name));
        }
    }
    Ok(())
}

/// Looks up a field that [`require_fields`] has already checked.
pub fn field<'a>(event: &'a EventObject, name: &'static str) -> Result<&'a Value, Rejection> {
    event.get(name).ok_or(Rejection::MissingField(name))
}

/// Returns the value as an `i64` if it is an integral JSON number.
///
/// Booleans and floats (even `1.0`) are not integers.
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Returns the value as an `f64` if it is any JSON number.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders a value for an error message: strings raw, anything else as
/// compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns true for Unicode whitespace and the ASCII separators
/// `\x1C`..=`\x1F`, which `char::is_whitespace` leaves out.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// Strips leading and trailing characters matched by [`is_space`].
pub fn trim_space(value: &str) -> &str {
    value.trim_matches(is_space)
}
