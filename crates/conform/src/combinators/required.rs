//! REQUIRED combinator - rejects absent values
//!
//! Primitives pass absent values; wrapping one in [`Required`] turns absence
//! into a failure. Present values are delegated to the inner validator as-is.
//!
//! # Examples
//!
//! ```
//! use conform::prelude::*;
//!
//! let name = required(string());
//! assert_eq!(name.expected(), "string (required)");
//! assert!(name.validate(Some(&Value::from("bob")), "name").is_ok());
//! assert!(name.validate(None, "name").is_err());
//! ```

use crate::foundation::{Expected, Failure, ItemName, Outcome, Validate};
use crate::value::Value;

/// Fails on absence, otherwise delegates to the inner validator.
#[derive(Debug, Clone)]
pub struct Required<V> {
    inner: V,
    label: String,
}

impl<V: Validate> Required<V> {
    /// Wraps `inner`; the label is the inner label with ` (required)` appended.
    pub fn new(inner: V) -> Self {
        let label = format!("{} (required)", inner.expected());
        Self { inner, label }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Required<V> {
    fn expected(&self) -> &str {
        &self.label
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        match value {
            None => Outcome::Fail(
                Failure::new(
                    None,
                    name,
                    Expected::Label(self.inner.expected().to_owned()),
                    self.label.as_str(),
                )
                .required(),
            ),
            Some(_) => self.inner.check(value, name, parent),
        }
    }
}

/// Creates a [`Required`] combinator.
pub fn required<V: Validate>(inner: V) -> Required<V> {
    Required::new(inner)
}
