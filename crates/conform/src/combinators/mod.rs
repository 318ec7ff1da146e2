//! Combinators built from other validators
//!
//! - [`required`] - absence becomes a failure
//! - [`or`] / [`ValidateExt::or`](crate::foundation::ValidateExt::or) - at least one alternative passes
//! - [`equals`] - strict literal match
//! - [`one_of`] / [`one_of_labeled`] - membership in a finite set of literals

pub mod equals;
pub mod one_of;
pub mod or;
pub mod required;

pub use equals::{Equals, equals};
pub use one_of::{OneOf, one_of, one_of_labeled};
pub use or::{Or, or};
pub use required::{Required, required};
