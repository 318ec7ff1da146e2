//! Structural validators that recurse into containers
//!
//! - [`properties`] / [`Properties`] - named fields of a mapping
//! - [`elements`] / [`Elements`] - every item of a sequence
//!
//! Both build the qualified name of the container from the parent path they
//! are given (`options.subconfig`, `ary[1]`) and pass it down to their
//! children, so nesting in any combination yields addressable failures.

pub mod elements;
pub mod properties;
pub mod rules;

pub use elements::{Elements, elements};
pub use properties::{Properties, properties};
pub use rules::Rules;
