//! Prelude module for convenient imports.
//!
//! Provides a single `use conform::prelude::*;` import that brings in the
//! traits, the value model, every primitive, combinator and structural
//! validator, and the composition macros.
//!
//! # Examples
//!
//! ```
//! use conform::prelude::*;
//!
//! let options = props! {
//!     "type" => required(string()),
//!     "message" => string(),
//! };
//! assert!(options.validate(None, "options").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcomes, errors
// ============================================================================

pub use crate::foundation::{
    ErrorMode, Expected, Failure, FailureKind, ItemName, Outcome, SharedValidator, Validate,
    ValidateExt, ValidationError, ValidationResult, qualify,
};

// ============================================================================
// VALUES
// ============================================================================

pub use crate::describe::describe;
pub use crate::value::{Value, ValueKind};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::primitives::{
    Primitive, TypeCheck, array, binary, boolean, integer, nan, null, number, object, pattern,
    primitive, string, undefined,
};

pub use crate::combinators::{
    Equals, OneOf, Or, Required, equals, one_of, one_of_labeled, or, required,
};

pub use crate::structural::{Elements, Properties, Rules, elements, properties};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{any_of, props};
