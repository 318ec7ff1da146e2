//! OR combinator - logical disjunction of validators
//!
//! [`Or`] passes when at least one alternative passes. Alternatives are probed
//! in order and the first pass short-circuits; probing has no side effects, so
//! the order is not observable. When every alternative fails the combinator
//! reports its own composite label rather than any single child's complaint.
//!
//! # Examples
//!
//! ```
//! use conform::prelude::*;
//!
//! let name_or_callback = string().or(number()).or(equals(38));
//! assert_eq!(name_or_callback.expected(), "string or number or 38");
//!
//! let err = name_or_callback
//!     .validate(Some(&Value::Bool(true)), "argument 1 (name or callback)")
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected argument 1 (name or callback) to be string or number or 38, \
//!      but instead got true (boolean)"
//! );
//! ```

use crate::foundation::{Failure, ItemName, Outcome, SharedValidator, Validate};
use crate::value::Value;
use smallvec::SmallVec;
use std::fmt;

/// Passes when at least one alternative passes.
#[derive(Clone, Default)]
pub struct Or {
    alternatives: SmallVec<[SharedValidator; 4]>,
    label: String,
}

impl Or {
    /// Creates an `Or` over the given alternatives.
    pub fn new(alternatives: impl IntoIterator<Item = SharedValidator>) -> Self {
        let alternatives: SmallVec<[SharedValidator; 4]> = alternatives.into_iter().collect();
        let label = join_labels(&alternatives);
        Self {
            alternatives,
            label,
        }
    }

    /// Appends another alternative.
    #[must_use = "builder methods must be chained or built"]
    pub fn or<V>(mut self, other: V) -> Self
    where
        V: Validate + 'static,
    {
        let other: SharedValidator = std::sync::Arc::new(other);
        if self.alternatives.is_empty() {
            self.label = other.expected().to_owned();
        } else {
            self.label.push_str(" or ");
            self.label.push_str(other.expected());
        }
        self.alternatives.push(other);
        self
    }

    /// Returns the alternatives in probing order.
    pub fn alternatives(&self) -> &[SharedValidator] {
        &self.alternatives
    }
}

fn join_labels(alternatives: &[SharedValidator]) -> String {
    alternatives
        .iter()
        .map(|v| v.expected())
        .collect::<Vec<_>>()
        .join(" or ")
}

impl FromIterator<SharedValidator> for Or {
    fn from_iter<I: IntoIterator<Item = SharedValidator>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("label", &self.label)
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

impl Validate for Or {
    fn expected(&self) -> &str {
        &self.label
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        // Absence is a required failure only if every alternative demanded presence.
        let mut absence_required = value.is_none() && !self.alternatives.is_empty();
        for alt in &self.alternatives {
            match alt.check(value, name, parent) {
                Outcome::Pass => return Outcome::Pass,
                Outcome::Fail(failure) => absence_required &= failure.required,
            }
        }

        tracing::trace!(
            item = %name,
            expected = %self.label,
            alternatives = self.alternatives.len(),
            "all alternatives failed"
        );
        let failure = Failure::labeled(value, name, &self.label);
        Outcome::Fail(if absence_required {
            failure.required()
        } else {
            failure
        })
    }
}

/// Creates an [`Or`] from any number of shared validators.
///
/// # Examples
///
/// ```
/// use conform::prelude::*;
///
/// let v = or([string().shared(), null().shared()]);
/// assert_eq!(v.expected(), "string or null");
/// assert!(v.validate(Some(&Value::Null), "x").is_ok());
/// ```
pub fn or(alternatives: impl IntoIterator<Item = SharedValidator>) -> Or {
    Or::new(alternatives)
}
