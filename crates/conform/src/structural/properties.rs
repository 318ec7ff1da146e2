//! PROPERTIES - validates the named fields of a mapping
//!
//! The value must first be an object (exactly as [`object`] would judge it).
//! Then every declared field is checked, in declaration order, under its own
//! name with the mapping's qualified name as parent. The first failing field
//! stops the walk: there is no aggregation of simultaneous failures.
//!
//! A field failure that no deeper structural validator has claimed is
//! attributed to this mapping as an invalid property; one already claimed
//! (a failure inside a nested `properties` or `elements`) surfaces unchanged.
//!
//! # Examples
//!
//! ```
//! use conform::prelude::*;
//!
//! let options = props! {
//!     "foo" => number(),
//!     "subconfig" => props! {
//!         "logger" => props! {
//!             "filename" => required(string()),
//!         },
//!     },
//! };
//!
//! let value = Value::from(serde_json::json!({"foo": 83, "subconfig": {"logger": {}}}));
//! let err = options.validate(Some(&value), "options").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected property 'filename' of `options.subconfig.logger` to be string (required), \
//!      but instead got undefined"
//! );
//! ```

use super::rules::Rules;
use crate::foundation::{FailureKind, ItemName, Outcome, SharedValidator, Validate, qualify};
use crate::primitives::{TypeCheck, object};
use crate::value::Value;
use indexmap::IndexMap;

/// Validates named fields of a mapping.
#[derive(Debug, Clone)]
pub struct Properties {
    fields: IndexMap<String, Rules>,
    object: TypeCheck,
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

impl Properties {
    /// Creates a validator with no fields; it only requires an object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            object: object(),
        }
    }

    /// Declares a field checked by a single validator.
    ///
    /// Declaring the same key again replaces its rules but keeps its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(self, key: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.field_rules(key, Rules::from(validator))
    }

    /// Declares a field checked by several validators in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_all(
        self,
        key: impl Into<String>,
        validators: impl IntoIterator<Item = SharedValidator>,
    ) -> Self {
        self.field_rules(key, validators.into_iter().collect())
    }

    /// Declares a field with prepared [`Rules`].
    #[must_use = "builder methods must be chained or built"]
    pub fn field_rules(mut self, key: impl Into<String>, rules: Rules) -> Self {
        self.fields.insert(key.into(), rules);
        self
    }

    /// Returns the declared fields in checking order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Rules)> {
        self.fields.iter().map(|(k, r)| (k.as_str(), r))
    }
}

impl Validate for Properties {
    fn expected(&self) -> &str {
        self.object.expected()
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        let shape = self.object.check(value, name, parent);
        let Some(obj) = value else {
            return shape;
        };
        if shape.is_fail() {
            return shape;
        }

        let container = qualify(parent, name);
        let field_parent = Some(container.as_str());
        for (key, rules) in &self.fields {
            let outcome = rules.check(obj.get(key), &ItemName::from(key), field_parent);
            if let Outcome::Fail(failure) = outcome {
                return Outcome::Fail(failure.within(FailureKind::InvalidProperty, &container));
            }
        }
        Outcome::Pass
    }
}

impl<K, R> FromIterator<(K, R)> for Properties
where
    K: Into<String>,
    R: Into<Rules>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |props, (key, rules)| props.field_rules(key, rules.into()))
    }
}

/// Creates a [`Properties`] validator from `(key, rules)` pairs.
///
/// The [`props!`](crate::props) macro is usually more convenient when fields
/// use different validator types.
pub fn properties<K, R>(spec: impl IntoIterator<Item = (K, R)>) -> Properties
where
    K: Into<String>,
    R: Into<Rules>,
{
    spec.into_iter().collect()
}
