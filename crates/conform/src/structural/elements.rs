//! ELEMENTS - validates every item of a sequence against one validator

use crate::foundation::{FailureKind, ItemName, Outcome, Validate, qualify};
use crate::primitives::{TypeCheck, array};
use crate::value::Value;

/// Validates every item of an array, in ascending index order.
///
/// The value must first be an array (exactly as [`array`] would judge it).
/// Each item is checked under its index as name; the first failing item
/// stops the walk and, unless a deeper structural validator already claimed
/// it, is attributed to this array as an invalid element.
///
/// # Examples
///
/// ```
/// use conform::prelude::*;
///
/// let list = elements(string());
/// let value = Value::from(vec![Value::from("a"), Value::from("b"), Value::from(3)]);
/// let err = list.validate(Some(&value), "list").unwrap_err();
///
/// assert_eq!(err.failure().item_name, ItemName::Index(2));
/// assert_eq!(err.failure().described_value, "3 (number)");
/// assert_eq!(
///     err.to_string(),
///     "Expected item 2 of `list` to be string, but instead got 3 (number)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Elements<V> {
    inner: V,
    array: TypeCheck,
}

impl<V: Validate> Elements<V> {
    /// Creates a validator applying `inner` to every item.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            array: array(),
        }
    }

    /// Returns a reference to the item validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Elements<V> {
    fn expected(&self) -> &str {
        self.array.expected()
    }

    fn check(&self, value: Option<&Value>, name: &ItemName<'_>, parent: Option<&str>) -> Outcome {
        let items = match value {
            None => return Outcome::Pass,
            Some(Value::Array(items)) => items,
            Some(_) => return self.array.check(value, name, parent),
        };

        let container = qualify(parent, name);
        let item_parent = Some(container.as_str());
        for (index, item) in items.iter().enumerate() {
            let outcome = self.inner.check(Some(item), &ItemName::Index(index), item_parent);
            if let Outcome::Fail(failure) = outcome {
                return Outcome::Fail(failure.within(FailureKind::InvalidElement, &container));
            }
        }
        Outcome::Pass
    }
}

/// Creates an [`Elements`] validator.
pub fn elements<V: Validate>(inner: V) -> Elements<V> {
    Elements::new(inner)
}
