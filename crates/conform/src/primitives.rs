//! Leaf validators built from a predicate and an expectation label.
//!
//! Every primitive is optional by default: an absent value passes. Wrap a
//! primitive in [`required`](crate::combinators::required) to reject absence.
//!
//! # Examples
//!
//! ```
//! use conform::prelude::*;
//!
//! assert!(string().validate(Some(&Value::from("hi")), "name").is_ok());
//! assert!(string().validate(None, "name").is_ok());
//! assert!(string().validate(Some(&Value::from(1)), "name").is_err());
//!
//! let even = primitive("even number", |v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
//! assert!(even.validate(Some(&Value::from(3)), "n").is_err());
//! ```

use crate::foundation::{Failure, ItemName, Outcome, Validate};
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;

/// A leaf validator: a label plus a predicate over present values.
#[derive(Clone)]
pub struct Primitive<F> {
    label: Cow<'static, str>,
    predicate: F,
}

/// A primitive backed by a plain function pointer, as returned by the canonical constructors.
pub type TypeCheck = Primitive<fn(&Value) -> bool>;

impl<F> Primitive<F>
where
    F: Fn(&Value) -> bool,
{
    /// Creates a primitive from a label and a predicate.
    pub fn new(label: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Self {
            label: label.into(),
            predicate,
        }
    }

    /// Returns `true` if `value` is absent or satisfies the predicate.
    pub fn accepts(&self, value: Option<&Value>) -> bool {
        value.is_none_or(|v| (self.predicate)(v))
    }
}

impl<F> fmt::Debug for Primitive<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("label", &self.label)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<F> Validate for Primitive<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn expected(&self) -> &str {
        &self.label
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, _parent: Option<&str>) -> Outcome {
        if self.accepts(value) {
            Outcome::Pass
        } else {
            Outcome::Fail(Failure::labeled(value, name, &self.label))
        }
    }
}

/// Creates a primitive from a label and a predicate.
pub fn primitive<F>(label: impl Into<Cow<'static, str>>, predicate: F) -> Primitive<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Primitive::new(label, predicate)
}

fn type_check(label: &'static str, predicate: fn(&Value) -> bool) -> TypeCheck {
    Primitive::new(label, predicate)
}

// ============================================================================
// CANONICAL PRIMITIVES
// ============================================================================

/// Passes strings.
#[must_use]
pub fn string() -> TypeCheck {
    type_check("string", |v| matches!(v, Value::String(_)))
}

/// Passes numbers, including NaN and infinities.
#[must_use]
pub fn number() -> TypeCheck {
    type_check("number", |v| matches!(v, Value::Number(_)))
}

/// Passes booleans.
#[must_use]
pub fn boolean() -> TypeCheck {
    type_check("boolean", |v| matches!(v, Value::Bool(_)))
}

/// Passes mappings. Null and arrays are not objects.
#[must_use]
pub fn object() -> TypeCheck {
    type_check("object", |v| matches!(v, Value::Object(_)))
}

/// Passes arrays.
#[must_use]
pub fn array() -> TypeCheck {
    type_check("array", |v| matches!(v, Value::Array(_)))
}

/// Passes raw byte buffers.
#[must_use]
pub fn binary() -> TypeCheck {
    type_check("binary", |v| matches!(v, Value::Binary(_)))
}

/// Passes regular expressions.
#[must_use]
pub fn pattern() -> TypeCheck {
    type_check("pattern", |v| matches!(v, Value::Pattern(_)))
}

/// Passes an explicit null.
#[must_use]
pub fn null() -> TypeCheck {
    type_check("null", Value::is_null)
}

/// Passes NaN.
#[must_use]
pub fn nan() -> TypeCheck {
    type_check("NaN", |v| matches!(v, Value::Number(n) if n.is_nan()))
}

/// Passes finite numbers without a fractional part.
#[must_use]
pub fn integer() -> TypeCheck {
    type_check("integer", |v| {
        matches!(v, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
    })
}

/// Passes only absence.
#[must_use]
pub fn undefined() -> TypeCheck {
    type_check("undefined", |_| false)
}
