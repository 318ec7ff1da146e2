//! Failure records and the probing outcome type.

use super::name::{ItemName, qualify};
use crate::describe::describe;
use crate::value::Value;
use std::fmt;

// ============================================================================
// FAILURE KIND
// ============================================================================

/// Where a failure occurred relative to a structural validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailureKind {
    /// The checked value itself failed its rule.
    #[default]
    Validation,
    /// A named field of a validated mapping failed.
    InvalidProperty,
    /// An indexed item of a validated sequence failed.
    InvalidElement,
}

impl FailureKind {
    /// Stable code for programmatic handling.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::InvalidProperty => "invalid.property",
            Self::InvalidElement => "invalid.element",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// EXPECTED
// ============================================================================

/// Structured form of what a validator demanded.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// A descriptive label such as `string` or `one of A B C`.
    Label(String),
    /// An exact literal, as demanded by `equals`.
    Literal(Value),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// One conformance violation.
///
/// `container_name` stays `None` until a structural validator claims the
/// failure; [`Failure::within`] never overwrites an existing container, so a
/// failure raised deep inside nested structures keeps its innermost address.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Where the failure occurred relative to a structural validator.
    pub kind: FailureKind,
    /// The offending value; `None` when it was absent.
    pub value: Option<Value>,
    /// Human-readable rendering of `value`.
    pub described_value: String,
    /// The name under which the value was checked: a field, an index, or a caller label.
    pub item_name: ItemName<'static>,
    /// Structured form of the expectation.
    pub expected: Expected,
    /// Display form of the expectation.
    pub expected_label: String,
    /// Whether absence alone caused the failure.
    pub required: bool,
    /// Qualified name of the enclosing mapping or sequence.
    pub container_name: Option<String>,
}

impl Failure {
    /// Creates a failure for `value` checked under `name`.
    pub fn new(
        value: Option<&Value>,
        name: &ItemName<'_>,
        expected: Expected,
        expected_label: impl Into<String>,
    ) -> Self {
        Self {
            kind: FailureKind::Validation,
            value: value.cloned(),
            described_value: describe(value),
            item_name: name.clone().into_owned(),
            expected,
            expected_label: expected_label.into(),
            required: false,
            container_name: None,
        }
    }

    /// Creates a failure whose structured and display expectation are the same label.
    pub fn labeled(value: Option<&Value>, name: &ItemName<'_>, label: &str) -> Self {
        Self::new(value, name, Expected::Label(label.to_owned()), label)
    }

    /// Marks the failure as caused by absence.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attributes the failure to a structural container, unless one already claimed it.
    #[must_use = "builder methods must be chained or built"]
    pub fn within(mut self, kind: FailureKind, container: &str) -> Self {
        if self.container_name.is_none() {
            self.kind = kind;
            self.container_name = Some(container.to_owned());
        }
        self
    }

    /// Full path of the failing value, e.g. `options.subconfig.logger.filename` or `ary[2]`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        qualify(self.container_name.as_deref(), &self.item_name)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of probing a value: it either conforms or carries a [`Failure`].
#[derive(Debug, Clone, PartialEq)]
#[must_use = "validation outcome must be checked"]
pub enum Outcome {
    /// The value conforms.
    Pass,
    /// The value does not conform.
    Fail(Failure),
}

impl Outcome {
    /// Returns `true` if the value conforms.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` if the value does not conform.
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Returns the failure, if any.
    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Self::Pass => None,
            Self::Fail(failure) => Some(failure),
        }
    }

    /// Converts into a `Result`, turning a failure into a [`ValidationError`](super::ValidationError).
    pub fn into_result(self) -> Result<(), super::ValidationError> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(failure) => Err(failure.into()),
        }
    }

    /// Maps the failure, leaving a pass untouched.
    pub fn map_failure(self, f: impl FnOnce(Failure) -> Failure) -> Self {
        match self {
            Self::Pass => Self::Pass,
            Self::Fail(failure) => Self::Fail(f(failure)),
        }
    }
}

impl From<Option<Failure>> for Outcome {
    fn from(failure: Option<Failure>) -> Self {
        failure.map_or(Self::Pass, Self::Fail)
    }
}
