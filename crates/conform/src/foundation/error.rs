//! Raised validation errors.
//!
//! A [`ValidationError`] is a [`Failure`] that a caller chose to raise. The
//! variant records where the failure happened relative to a structural
//! validator; every variant carries the same field set.

use super::failure::{Failure, FailureKind};

/// A raised conformance failure.
///
/// # Examples
///
/// ```
/// use conform::prelude::*;
///
/// let err = string().validate(Some(&Value::from(23084)), "argument 0 (type)").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Expected argument 0 (type) to be string, but instead got 23084 (number)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The value itself failed its rule.
    #[error(
        "Expected {} to be {}, but instead got {}",
        .0.item_name,
        .0.expected_label,
        .0.described_value
    )]
    Validation(Box<Failure>),

    /// A named field of a validated mapping failed.
    #[error(
        "Expected property '{}' of `{}` to be {}, but instead got {}",
        .0.item_name,
        .0.container_name.as_deref().unwrap_or_default(),
        .0.expected_label,
        .0.described_value
    )]
    InvalidProperty(Box<Failure>),

    /// An indexed item of a validated sequence failed.
    #[error(
        "Expected item {} of `{}` to be {}, but instead got {}",
        .0.item_name,
        .0.container_name.as_deref().unwrap_or_default(),
        .0.expected_label,
        .0.described_value
    )]
    InvalidElement(Box<Failure>),
}

impl From<Failure> for ValidationError {
    fn from(failure: Failure) -> Self {
        match failure.kind {
            FailureKind::Validation => Self::Validation(Box::new(failure)),
            FailureKind::InvalidProperty => Self::InvalidProperty(Box::new(failure)),
            FailureKind::InvalidElement => Self::InvalidElement(Box::new(failure)),
        }
    }
}

impl ValidationError {
    /// Returns the kind of failure.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::InvalidProperty(_) => FailureKind::InvalidProperty,
            Self::InvalidElement(_) => FailureKind::InvalidElement,
        }
    }

    /// Stable code: `validation`, `invalid.property` or `invalid.element`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns the underlying failure record.
    #[must_use]
    pub fn failure(&self) -> &Failure {
        match self {
            Self::Validation(f) | Self::InvalidProperty(f) | Self::InvalidElement(f) => f,
        }
    }

    /// Consumes the error and returns the failure record.
    #[must_use]
    pub fn into_failure(self) -> Failure {
        match self {
            Self::Validation(f) | Self::InvalidProperty(f) | Self::InvalidElement(f) => *f,
        }
    }

    /// Full path of the failing value.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        self.failure().qualified_name()
    }

    /// Converts the error to a JSON structure for the presentation layer.
    #[cfg(feature = "json")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use super::name::ItemName;
        use serde_json::json;

        let failure = self.failure();
        let item_name = match &failure.item_name {
            ItemName::Key(key) => json!(key),
            ItemName::Index(index) => json!(index),
        };
        json!({
            "type": self.code(),
            "message": self.to_string(),
            "itemName": item_name,
            "containerName": failure.container_name,
            "qualifiedName": failure.qualified_name(),
            "expected": failure.expected.to_string(),
            "expectedLabel": failure.expected_label,
            "describedValue": failure.described_value,
            "required": failure.required,
        })
    }
}
