//! Ordered rule lists for a single field.

use crate::foundation::{ItemName, Outcome, SharedValidator, Validate};
use crate::value::Value;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// The validators applied to one field, checked in order; the first failure wins.
///
/// An empty list places no constraint on the field.
///
/// Most fields carry a single rule, which converts from any validator:
///
/// ```
/// use conform::prelude::*;
/// use conform::structural::Rules;
///
/// let single = Rules::from(required(string()));
/// let several = Rules::from_iter([number().shared(), integer().shared()]);
/// assert_eq!(single.len(), 1);
/// assert_eq!(several.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Rules(SmallVec<[SharedValidator; 1]>);

impl Rules {
    /// Number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no rules; such a field accepts anything.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the rules in checking order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedValidator> {
        self.0.iter()
    }

    /// Checks `value` against every rule in order and returns the first failure.
    pub fn check(
        &self,
        value: Option<&Value>,
        name: &ItemName<'_>,
        parent: Option<&str>,
    ) -> Outcome {
        for rule in &self.0 {
            if let fail @ Outcome::Fail(_) = rule.check(value, name, parent) {
                return fail;
            }
        }
        Outcome::Pass
    }
}

impl<V: Validate + 'static> From<V> for Rules {
    fn from(validator: V) -> Self {
        Self(SmallVec::from_elem(Arc::new(validator) as SharedValidator, 1))
    }
}

impl FromIterator<SharedValidator> for Rules {
    fn from_iter<I: IntoIterator<Item = SharedValidator>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|r| r.expected())).finish()
    }
}
