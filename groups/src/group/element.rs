//! Elements: validated values tagged with the group that created them.

use crate::errors::GroupError;
use crate::group::Group;

use std::fmt;
use std::ops::Mul;

/// A value known to belong to the underlying set of `group`.
///
/// The element borrows its group, so many elements can share one group and
/// none of them outlives it. Elements are never mutated; composition always
/// produces a new one.
pub struct Element<'g, G: Group> {
    group: &'g G,
    value: G::Value,
}

impl<'g, G: Group> Element<'g, G> {
    /// Validates `value` against `group` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::InvalidElement` if `group` rejects the value.
    pub fn new(group: &'g G, value: G::Value) -> Result<Self, GroupError> {
        group.validate(&value).inspect_err(|err| {
            log::debug!("rejected {:?} as an element of {}: {}", value, group, err);
        })?;

        log::trace!("created element {:?} of {}", value, group);

        Ok(Element { group, value })
    }

    pub fn group(&self) -> &'g G {
        self.group
    }

    pub fn value(&self) -> &G::Value {
        &self.value
    }

    pub fn into_value(self) -> G::Value {
        self.value
    }

    /// Composes `self` with `other` using the operation of `self`'s group.
    ///
    /// The result is not re-validated: both provided families are closed under
    /// their operation.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::IncompatibleGroups` if the two groups are neither
    /// the same instance nor equal, and propagates any error of the operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use groups::{CyclicGroup, Group};
    /// let c5 = CyclicGroup::new(5);
    /// let a = c5.element(2).unwrap();
    /// let b = c5.element(4).unwrap();
    /// assert_eq!(*a.try_mul(&b).unwrap().value(), 1);
    /// ```
    pub fn try_mul(&self, other: &Element<'_, G>) -> Result<Element<'g, G>, GroupError> {
        if !self.group.is_compatible(other.group) {
            log::debug!(
                "refusing to compose elements of {} and {}",
                self.group,
                other.group
            );
            return Err(GroupError::IncompatibleGroups {
                left: self.group.to_string(),
                right: other.group.to_string(),
            });
        }

        let value = self.group.operation(&self.value, &other.value)?;
        log::trace!("composed {:?} in {}", value, self.group);

        Ok(Element {
            group: self.group,
            value,
        })
    }
}

impl<'g, G: Group> Mul<&Element<'_, G>> for &Element<'g, G> {
    type Output = Result<Element<'g, G>, GroupError>;

    fn mul(self, rhs: &Element<'_, G>) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl<G: Group> Clone for Element<'_, G> {
    fn clone(&self) -> Self {
        Element {
            group: self.group,
            value: self.value.clone(),
        }
    }
}

impl<G: Group> PartialEq for Element<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.value == other.value
    }
}

impl<G: Group> fmt::Display for Element<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.group.fmt_value(&self.value, f)?;
        write!(f, "_{}", self.group)
    }
}

impl<G: Group> fmt::Debug for Element<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({}, ", self.group)?;
        self.group.fmt_value(&self.value, f)?;
        write!(f, ")")
    }
}
