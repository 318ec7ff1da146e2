//! # conform
//!
//! Composable runtime conformance checks for dynamically shaped values.
//!
//! Validate function arguments and configuration trees at the boundary of a
//! program, before business logic runs. Each check either passes or produces
//! one structured failure naming what was expected, what was found, and where
//! in a nested structure it was found.
//!
//! ## Quick Start
//!
//! ```
//! use conform::prelude::*;
//!
//! let options = props! {
//!     "type" => required(string()),
//!     "retries" => [number(), integer()],
//!     "state" => one_of(["DISABLED", "ENABLED"]),
//!     "servers" => elements(props! { "host" => required(string()) }),
//! };
//!
//! let value = Value::from(serde_json::json!({
//!     "type": "thing",
//!     "state": "ENABLED",
//!     "servers": [{"host": "web1"}, {"port": 80}],
//! }));
//!
//! let err = options.validate(Some(&value), "options").unwrap_err();
//! assert_eq!(err.code(), "invalid.property");
//! assert_eq!(err.qualified_name(), "options.servers[1].host");
//! ```
//!
//! ## Building Blocks
//!
//! - **Primitives**: [`string`](primitives::string), [`number`](primitives::number),
//!   [`boolean`](primitives::boolean), [`object`](primitives::object),
//!   [`array`](primitives::array), [`binary`](primitives::binary),
//!   [`pattern`](primitives::pattern), [`null`](primitives::null),
//!   [`nan`](primitives::nan), [`integer`](primitives::integer),
//!   [`undefined`](primitives::undefined), or your own via
//!   [`primitive`](primitives::primitive)
//! - **Combinators**: [`required`](combinators::required), [`or`](combinators::or),
//!   [`equals`](combinators::equals), [`one_of`](combinators::one_of)
//! - **Structural**: [`properties`](structural::properties) / [`props!`],
//!   [`elements`](structural::elements)

// Failure carries the offending value; boxing it inside Outcome would add an
// allocation to every probe for no practical benefit.
#![allow(clippy::large_enum_variant)]

pub mod combinators;
pub mod describe;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod primitives;
pub mod structural;
pub mod value;
