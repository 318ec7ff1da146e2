//! Human-readable rendering of values for error messages.
//!
//! [`describe`] produces the `describedValue` part of a failure: the literal
//! form of the value followed by its kind, so that `3` and `"3"` can be told
//! apart in a message (`3 (number)` vs `"3" (string)`). Null and absent values
//! render as their bare kind name.

use crate::value::{Value, ValueKind};

/// Renders a possibly absent value as `<literal> (<kind>)`.
///
/// # Examples
///
/// ```
/// use conform::describe::describe;
/// use conform::value::Value;
///
/// assert_eq!(describe(Some(&Value::from(3))), "3 (number)");
/// assert_eq!(describe(Some(&Value::from("hi"))), "\"hi\" (string)");
/// assert_eq!(describe(Some(&Value::Null)), "null");
/// assert_eq!(describe(None), "undefined");
/// ```
#[must_use]
pub fn describe(value: Option<&Value>) -> String {
    match value {
        None => ValueKind::Undefined.to_string(),
        Some(Value::Null) => ValueKind::Null.to_string(),
        Some(value) => format!("{value} ({})", value.kind()),
    }
}

/// Renders a value in its bare form for use inside expectation labels.
///
/// Strings are not quoted, everything else uses its literal form.
#[must_use]
pub fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
