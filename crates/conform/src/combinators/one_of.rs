//! ONE OF combinator - membership in a finite set of literals
//!
//! Validates state-machine style domains where a value must be one of a fixed
//! set of choices, typically strings.
//!
//! # Examples
//!
//! ```
//! use conform::prelude::*;
//!
//! let state = one_of(["DISABLED", "ENABLED", "PROCESSING", "SHUTDOWN"]);
//! assert!(state.validate(Some(&Value::from("ENABLED")), "newState").is_ok());
//!
//! let err = state
//!     .validate(Some(&Value::from("DISARBLED")), "argument 0 (newState) to `transition`")
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected argument 0 (newState) to `transition` to be one of DISABLED ENABLED \
//!      PROCESSING SHUTDOWN, but instead got \"DISARBLED\" (string)"
//! );
//! ```

use crate::describe::literal;
use crate::foundation::{Failure, ItemName, Outcome, Validate};
use crate::value::Value;

/// Passes values strictly equal to one of the choices.
#[derive(Debug, Clone)]
pub struct OneOf {
    choices: Vec<Value>,
    label: String,
}

impl OneOf {
    /// Creates a validator labeled `one of` followed by the space-joined choices.
    pub fn new<I>(choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let choices: Vec<Value> = choices.into_iter().map(Into::into).collect();
        let label = format!(
            "one of {}",
            choices.iter().map(literal).collect::<Vec<_>>().join(" ")
        );
        Self { choices, label }
    }

    /// Replaces the default label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the choices in declaration order.
    pub fn choices(&self) -> &[Value] {
        &self.choices
    }
}

impl Validate for OneOf {
    fn expected(&self) -> &str {
        &self.label
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, _parent: Option<&str>) -> Outcome {
        match value {
            Some(value) if self.choices.contains(value) => Outcome::Pass,
            _ => Outcome::Fail(Failure::labeled(value, name, &self.label)),
        }
    }
}

/// Creates a [`OneOf`] validator with the default label.
pub fn one_of<I>(choices: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(choices)
}

/// Creates a [`OneOf`] validator with a custom label, e.g. `a log level`.
pub fn one_of_labeled<I>(choices: I, label: impl Into<String>) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(choices).with_label(label)
}
