//! Core validation types and traits
//!
//! This module contains the call contract shared by every validator:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Outcomes**: [`Outcome`], [`Failure`], [`FailureKind`], [`Expected`]
//! - **Errors**: [`ValidationError`], [`ErrorMode`]
//! - **Names**: [`ItemName`], [`qualify`]
//!
//! # Architecture
//!
//! Probing is the native form of a check: [`Validate::check`] returns an
//! [`Outcome`] and never raises. Raising is a thin wrapper applied at the call
//! site ([`ValidateExt::validate`], [`ValidateExt::run`]) that turns a
//! [`Failure`] into a [`ValidationError`]. Combinators probe their children
//! and build their own failure; structural validators claim child failures
//! with [`Failure::within`] so the first failing leaf surfaces with its kind,
//! container and qualified path.

pub mod error;
pub mod failure;
pub mod name;
pub mod traits;

pub use error::ValidationError;
pub use failure::{Expected, Failure, FailureKind, Outcome};
pub use name::{ItemName, qualify};
pub use traits::{ErrorMode, SharedValidator, Validate, ValidateExt};

/// A validation result using [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
