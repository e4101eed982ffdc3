//! Lightweight, validated algebraic groups.
//!
//! A group is built with its parameter `n` and then used as a factory for
//! [`Element`]s, which compose through the group's defining operation.
//!
//! ```
//! # use groups::{CyclicGroup, Group, GroupError};
//! # fn main() -> Result<(), GroupError> {
//! let c5 = CyclicGroup::new(5);
//! let product = (&c5.element(2)? * &c5.element(4)?)?;
//! assert_eq!(product.to_string(), "1_C5");
//! # Ok(())
//! # }
//! ```

pub mod cyclic;
pub mod errors;
pub mod group;
pub mod linear;

pub use cyclic::CyclicGroup;
pub use errors::GroupError;
pub use group::{Element, Group};
pub use linear::{GeneralLinearGroup, Matrix};
