//! Host value model
//!
//! Validators inspect a dynamically shaped [`Value`]: the kind of tree a
//! configuration loader or argument list produces. Absence of a value is not
//! a variant; it is `Option<&Value>::None` everywhere a value is checked.
//!
//! # Examples
//!
//! ```
//! use conform::value::{Value, ValueKind};
//!
//! let options: Value = [("name", Value::from("bob")), ("size", Value::from(8))]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(options.kind(), ValueKind::Object);
//! assert_eq!(options.get("size"), Some(&Value::Number(8.0)));
//! assert_eq!(options.get("missing"), None);
//! ```

use bytes::Bytes;
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value checked by validators.
#[derive(Debug, Clone)]
pub enum Value {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integers are stored as `f64`, so `38` and `38.0` are the same value.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A mapping that keeps insertion order.
    Object(IndexMap<String, Value>),
    /// A regular expression.
    Pattern(Regex),
    /// A raw byte buffer.
    Binary(Bytes),
}

/// Classification of a possibly absent value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The value is absent.
    Undefined,
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Boolean,
    /// [`Value::Number`].
    Number,
    /// [`Value::String`].
    String,
    /// [`Value::Array`].
    Array,
    /// [`Value::Object`].
    Object,
    /// [`Value::Pattern`].
    Pattern,
    /// [`Value::Binary`].
    Binary,
}

impl ValueKind {
    /// Classifies a possibly absent value.
    #[must_use]
    pub fn of(value: Option<&Value>) -> Self {
        value.map_or(Self::Undefined, Value::kind)
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Pattern => "pattern",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Pattern(_) => ValueKind::Pattern,
            Self::Binary(_) => ValueKind::Binary,
        }
    }

    /// Looks up a field of an object. Returns `None` for missing keys and non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Looks up an item of an array. Returns `None` out of bounds and for non-arrays.
    #[must_use]
    pub fn index(&self, index: usize) -> Option<&Value> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// Strict equality: IEEE comparison for numbers (NaN is never equal to itself),
// source text for patterns, structural comparison for containers.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Binary(a), Self::Binary(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Regex> for Value {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            // as_f64 only fails for arbitrary-precision numbers, which are not enabled
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

// ============================================================================
// LITERAL RENDERING
// ============================================================================

/// Maximum number of bytes shown when rendering a binary value.
const MAX_BINARY_PREVIEW: usize = 16;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
            Self::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
            Self::Binary(bytes) => {
                f.write_str("<Binary")?;
                for byte in bytes.iter().take(MAX_BINARY_PREVIEW) {
                    write!(f, " {byte:02x}")?;
                }
                if bytes.len() > MAX_BINARY_PREVIEW {
                    f.write_str(" ...")?;
                }
                f.write_str(">")
            }
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e16 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}
