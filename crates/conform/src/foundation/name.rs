//! Item names and qualified paths for values inside nested structures.

use std::borrow::Cow;
use std::fmt;

/// The name under which a value is checked.
///
/// Mapping fields and caller labels are keys, sequence items are indices.
/// The variant, not the text, decides how the name joins its parent path, so
/// a mapping key that happens to be numeric (`"200"`) stays a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemName<'a> {
    /// A field of a mapping or a free-form label such as `argument 0 (type)`.
    Key(Cow<'a, str>),
    /// A position in a sequence.
    Index(usize),
}

impl ItemName<'_> {
    /// Detaches the name from any borrowed key.
    #[must_use]
    pub fn into_owned(self) -> ItemName<'static> {
        match self {
            Self::Key(key) => ItemName::Key(Cow::Owned(key.into_owned())),
            Self::Index(index) => ItemName::Index(index),
        }
    }

    /// Returns `true` for [`ItemName::Index`].
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for ItemName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl<'a> From<&'a str> for ItemName<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl<'a> From<&'a String> for ItemName<'a> {
    fn from(key: &'a String) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl From<String> for ItemName<'static> {
    fn from(key: String) -> Self {
        Self::Key(Cow::Owned(key))
    }
}

impl From<usize> for ItemName<'static> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl PartialEq<&str> for ItemName<'_> {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Key(key) if key == other)
    }
}

impl PartialEq<usize> for ItemName<'_> {
    fn eq(&self, other: &usize) -> bool {
        matches!(self, Self::Index(index) if index == other)
    }
}

/// Joins a parent path and an item name.
///
/// Indices use brackets, keys use a dot. Without a parent the name stands
/// alone.
///
/// # Examples
///
/// ```
/// use conform::foundation::{ItemName, qualify};
///
/// assert_eq!(qualify(None, &"options".into()), "options");
/// assert_eq!(qualify(Some("options"), &"subconfig".into()), "options.subconfig");
/// assert_eq!(qualify(Some("ary"), &ItemName::Index(1)), "ary[1]");
/// assert_eq!(qualify(Some("responses"), &"200".into()), "responses.200");
/// ```
#[must_use]
pub fn qualify(parent: Option<&str>, name: &ItemName<'_>) -> String {
    match (parent, name) {
        (None, name) => name.to_string(),
        (Some(parent), ItemName::Index(index)) => format!("{parent}[{index}]"),
        (Some(parent), ItemName::Key(key)) => format!("{parent}.{key}"),
    }
}
