//! Macros for composing validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`props!`]: build a [`Properties`](crate::structural::Properties) validator
//! - [`any_of!`]: OR-chain multiple validators

// ============================================================================
// PROPS MACRO
// ============================================================================

/// Builds a [`Properties`](crate::structural::Properties) validator.
///
/// Each entry maps a string key to a validator, or to a bracketed list of
/// validators checked in order. Fields may use different validator types.
///
/// ```
/// use conform::prelude::*;
///
/// let server = props! {
///     "host" => required(string()),
///     "port" => [required(number()), integer()],
///     "tls" => boolean(),
/// };
///
/// let value: Value = [("host", Value::from("web1")), ("port", Value::from(80.5))]
///     .into_iter()
///     .collect();
/// let err = server.validate(Some(&value), "server").unwrap_err();
/// assert_eq!(err.failure().expected_label, "integer");
/// ```
#[macro_export]
macro_rules! props {
    (@acc $props:expr;) => {
        $props
    };
    (@acc $props:expr; $key:literal => [$($rule:expr),+ $(,)?] $(, $($rest:tt)*)?) => {
        $crate::props!(@acc $props.field_all(
            $key,
            [$($crate::foundation::ValidateExt::shared($rule)),+],
        ); $($($rest)*)?)
    };
    (@acc $props:expr; $key:literal => $rule:expr $(, $($rest:tt)*)?) => {
        $crate::props!(@acc $props.field($key, $rule); $($($rest)*)?)
    };
    ($($body:tt)*) => {
        $crate::props!(@acc $crate::structural::Properties::new(); $($body)*)
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// OR-chains multiple validators: at least one must pass.
///
/// ```
/// use conform::prelude::*;
///
/// let v = any_of![string(), number(), equals(Value::Null)];
/// assert_eq!(v.expected(), "string or number or null");
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $crate::combinators::or([$crate::foundation::ValidateExt::shared($first)])
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::or([
            $crate::foundation::ValidateExt::shared($first),
            $($crate::foundation::ValidateExt::shared($rest)),+
        ])
    };
}
