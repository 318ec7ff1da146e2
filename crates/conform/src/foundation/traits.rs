//! Core traits for the validation system

use super::error::ValidationError;
use super::failure::{Failure, Outcome};
use super::name::ItemName;
use crate::combinators::{Or, Required};
use crate::value::Value;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The call contract every validator honors.
///
/// A validator carries an expectation label and decides whether a possibly
/// absent value conforms. [`check`](Validate::check) never raises: it is the
/// probing form, and [`ValidateExt`] layers the raising form on top.
///
/// Validators hold no per-call state, so one instance can be shared across
/// threads and reused for any number of checks.
///
/// # Examples
///
/// ```
/// use conform::foundation::{Failure, ItemName, Outcome, Validate, ValidateExt};
/// use conform::value::Value;
///
/// struct Even;
///
/// impl Validate for Even {
///     fn expected(&self) -> &str {
///         "even number"
///     }
///
///     fn check(&self, value: Option<&Value>, name: &ItemName<'_>, _: Option<&str>) -> Outcome {
///         match value {
///             Some(Value::Number(n)) if n % 2.0 == 0.0 => Outcome::Pass,
///             _ => Outcome::Fail(Failure::labeled(value, name, self.expected())),
///         }
///     }
/// }
///
/// assert!(Even.validate(Some(&Value::from(4)), "n").is_ok());
/// assert!(Even.validate(Some(&Value::from(5)), "n").is_err());
/// ```
pub trait Validate: Send + Sync {
    /// The expectation label, e.g. `string` or `function or string or 38`.
    fn expected(&self) -> &str;

    /// Checks `value` under `name`.
    ///
    /// `name` is a key or an index, as chosen by the caller or the enclosing
    /// structure. `parent` is the qualified name of that structure, if any.
    /// Leaf validators ignore it; structural validators use it to build the
    /// qualified names they report.
    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome;
}

/// A type-erased validator that can be stored in heterogeneous collections.
pub type SharedValidator = Arc<dyn Validate>;

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn expected(&self) -> &str {
        (**self).expected()
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        (**self).check(value, name, parent)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn expected(&self) -> &str {
        (**self).expected()
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        (**self).check(value, name, parent)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn expected(&self) -> &str {
        (**self).expected()
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        (**self).check(value, name, parent)
    }
}

// ============================================================================
// ERROR MODE
// ============================================================================

/// How a failure is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorMode {
    /// Failures become a [`ValidationError`].
    #[default]
    Raise,
    /// Failures are returned as data in [`Outcome::Fail`].
    Probe,
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Invocation helpers and fluent composition for every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Checks `value` and raises any failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::prelude::*;
    ///
    /// let kind = required(string());
    /// assert!(kind.validate(Some(&Value::from("thing")), "argument 0 (type)").is_ok());
    ///
    /// let err = kind.validate(None, "argument 0 (type)").unwrap_err();
    /// assert!(err.failure().required);
    /// ```
    fn validate<'a>(
        &self,
        value: Option<&Value>,
        name: impl Into<ItemName<'a>>,
    ) -> Result<(), ValidationError> {
        reported(self.check(value, &name.into(), None)).into_result()
    }

    /// Checks `value` and returns any failure as data.
    fn probe<'a>(&self, value: Option<&Value>, name: impl Into<ItemName<'a>>) -> Outcome {
        reported(self.check(value, &name.into(), None))
    }

    /// The full call contract: `(value, name, mode, parent)`.
    ///
    /// In [`ErrorMode::Raise`] a failure becomes `Err`, so `Ok(Outcome::Fail(_))`
    /// is only ever returned in [`ErrorMode::Probe`].
    fn run<'a>(
        &self,
        value: Option<&Value>,
        name: impl Into<ItemName<'a>>,
        mode: ErrorMode,
        parent: Option<&str>,
    ) -> Result<Outcome, ValidationError> {
        match (reported(self.check(value, &name.into(), parent)), mode) {
            (Outcome::Fail(failure), ErrorMode::Raise) => Err(failure.into()),
            (outcome, _) => Ok(outcome),
        }
    }

    /// Combines with another validator: at least one must pass.
    ///
    /// Chains flatten, so `a.or(b).or(c)` is labeled `a or b or c`.
    fn or<V>(self, other: V) -> Or
    where
        Self: 'static,
        V: Validate + 'static,
    {
        Or::from_iter([self.shared(), other.shared()])
    }

    /// Makes absence of the value a failure.
    fn required(self) -> Required<Self> {
        Required::new(self)
    }

    /// Erases the concrete type so the validator can be stored alongside others.
    fn shared(self) -> SharedValidator
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// Rejections are logged once, at the call boundary. Nested `Validate::check`
// calls stay silent.
fn reported(outcome: Outcome) -> Outcome {
    if let Outcome::Fail(failure) = &outcome {
        log_rejection(failure);
    }
    outcome
}

fn log_rejection(failure: &Failure) {
    tracing::debug!(
        item = %failure.qualified_name(),
        code = failure.kind.code(),
        required = failure.required,
        "value rejected"
    );
}
