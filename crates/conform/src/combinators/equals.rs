//! EQUALS combinator - strict literal match

use crate::foundation::{Expected, Failure, ItemName, Outcome, Validate};
use crate::value::Value;

/// Passes only values strictly equal to a literal.
///
/// Numbers compare by value (`38` equals `38.0`), values of different kinds
/// never compare equal, and an absent value never equals anything. Mostly
/// useful as an alternative inside [`or`](super::or): "a string, or exactly 38".
///
/// # Examples
///
/// ```
/// use conform::prelude::*;
///
/// let v = equals(38);
/// assert!(v.validate(Some(&Value::from(38.0)), "foo").is_ok());
/// assert!(v.validate(Some(&Value::from("38")), "foo").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Equals {
    expected: Value,
    label: String,
}

impl Equals {
    /// Creates a validator matching `expected`; the label is its literal rendering.
    pub fn new(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let label = expected.to_string();
        Self { expected, label }
    }

    /// Returns the literal being matched.
    pub fn value(&self) -> &Value {
        &self.expected
    }
}

impl Validate for Equals {
    fn expected(&self) -> &str {
        &self.label
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, _parent: Option<&str>) -> Outcome {
        if value == Some(&self.expected) {
            Outcome::Pass
        } else {
            Outcome::Fail(Failure::new(
                value,
                name,
                Expected::Literal(self.expected.clone()),
                self.label.as_str(),
            ))
        }
    }
}

/// Creates an [`Equals`] validator.
pub fn equals(expected: impl Into<Value>) -> Equals {
    Equals::new(expected)
}
