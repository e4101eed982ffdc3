//! # Group Module
//!
//! Provides the [`Group`] capability set every group family implements and the
//! [`Element`] type that a group hands out as a validated factory.

pub mod element;

pub use element::Element;

use crate::errors::GroupError;

use std::fmt;

/// A family of groups parametrised by a single integer `n`.
///
/// The meaning of `n` (order, degree, dimension) depends on the family.
/// Implementors are immutable: validating and combining values never touch
/// the group itself.
///
/// `Display` is expected to render `"{SYMBOL}{n}"` and `Debug` to render
/// `"{NAME}({n})"`; [`fmt_label`] and [`fmt_constructor`] do exactly that.
pub trait Group: Sized + PartialEq + fmt::Debug + fmt::Display {
    /// Raw representation of an element.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Short display tag of the family, e.g. `C` for cyclic groups.
    const SYMBOL: &'static str;

    /// Family name echoed by the `Debug` representation.
    const NAME: &'static str;

    /// The primary group parameter.
    fn n(&self) -> usize;

    /// Checks that `value` belongs to the underlying set of the group.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::InvalidElement` describing the expected domain.
    fn validate(&self, value: &Self::Value) -> Result<(), GroupError>;

    /// Combines two raw values with the defining operation of the group.
    fn operation(&self, a: &Self::Value, b: &Self::Value) -> Result<Self::Value, GroupError>;

    /// Writes a raw value the way it appears inside an element's string forms.
    fn fmt_value(&self, value: &Self::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Creates a validated element of this group.
    ///
    /// # Example
    ///
    /// ```
    /// # use groups::{CyclicGroup, Group};
    /// let c5 = CyclicGroup::new(5);
    /// let three = c5.element(3).unwrap();
    /// assert_eq!(three.to_string(), "3_C5");
    /// assert!(c5.element(5).is_err());
    /// ```
    fn element(&self, value: Self::Value) -> Result<Element<'_, Self>, GroupError> {
        Element::new(self, value)
    }

    /// Whether elements of `self` and `other` may be composed.
    ///
    /// Holds for the same instance and for equal groups (same family, same `n`).
    fn is_compatible(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self == other
    }
}

/// Writes the human-readable `"{symbol}{n}"` label, e.g. `C5`.
pub fn fmt_label<G: Group>(group: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", G::SYMBOL, group.n())
}

/// Writes the constructor-echoing `"{name}({n})"` form, e.g. `CyclicGroup(5)`.
pub fn fmt_constructor<G: Group>(group: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}({})", G::NAME, group.n())
}
