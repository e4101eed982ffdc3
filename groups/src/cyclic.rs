//! Cyclic groups represented by integer addition modulo n.

use crate::errors::GroupError;
use crate::group::{Group, fmt_constructor, fmt_label};

use serde::{Deserialize, Serialize};

use std::fmt;

/// The cyclic group `C_n`: integers in `[0, n)` under addition modulo `n`.
///
/// `n` is not checked. With `n = 0` the underlying set is empty and every
/// value is rejected.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CyclicGroup {
    pub n: usize,
}

impl CyclicGroup {
    pub fn new(n: usize) -> Self {
        CyclicGroup { n }
    }
}

impl Group for CyclicGroup {
    type Value = i64;

    const SYMBOL: &'static str = "C";
    const NAME: &'static str = "CyclicGroup";

    fn n(&self) -> usize {
        self.n
    }

    /// Checks that `value` is an integer in the range `[0, n)`.
    fn validate(&self, value: &i64) -> Result<(), GroupError> {
        if *value < 0 || *value as u128 >= self.n as u128 {
            return Err(GroupError::InvalidElement(format!(
                "Element value must be an integer in the range [0, {}).",
                self.n
            )));
        }

        Ok(())
    }

    /// Computes `(a + b) mod n`.
    ///
    /// Uses `i128` internally so that the sum cannot overflow before the modulo.
    ///
    /// # Example
    ///
    /// ```
    /// # use groups::{CyclicGroup, Group};
    /// let c10 = CyclicGroup::new(10);
    /// assert_eq!(c10.operation(&7, &5).unwrap(), 2);
    /// assert_eq!(c10.operation(&0, &9).unwrap(), 9);
    /// ```
    fn operation(&self, a: &i64, b: &i64) -> Result<i64, GroupError> {
        let sum = *a as i128 + *b as i128;
        let rem = sum.checked_rem_euclid(self.n as i128).ok_or_else(|| {
            GroupError::InvalidElement(format!("{} has no elements to combine", self))
        })?;

        i64::try_from(rem).map_err(|_| {
            GroupError::InvalidElement(format!(
                "Sum {} mod {} does not fit into an i64 value",
                sum, self.n
            ))
        })
    }

    fn fmt_value(&self, value: &i64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value)
    }
}

impl fmt::Display for CyclicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_label(self, f)
    }
}

impl fmt::Debug for CyclicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_constructor(self, f)
    }
}
