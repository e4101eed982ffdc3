//! General linear groups represented by matrix multiplication.

use crate::errors::GroupError;
use crate::group::{Group, fmt_constructor, fmt_label};
use crate::linear::Matrix;
use crate::linear::matrix_ops::{format_matrix, matrix_mul, shape};

use num_traits::Num;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// The group `G_n` of `n x n` matrices over `T` under matrix multiplication.
///
/// Only the shape of a matrix is checked, not its invertibility, so singular
/// matrices are accepted as elements.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GeneralLinearGroup<T = f64> {
    pub n: usize,
    #[serde(skip)]
    scalar: PhantomData<fn() -> T>,
}

impl<T> GeneralLinearGroup<T> {
    pub fn new(n: usize) -> Self {
        GeneralLinearGroup {
            n,
            scalar: PhantomData,
        }
    }
}

impl<T> Group for GeneralLinearGroup<T>
where
    T: Num + Copy + fmt::Debug + fmt::Display,
{
    type Value = Matrix<T>;

    const SYMBOL: &'static str = "G";
    const NAME: &'static str = "GeneralLinearGroup";

    fn n(&self) -> usize {
        self.n
    }

    /// Checks that `value` is a square matrix of size `n x n`.
    fn validate(&self, value: &Matrix<T>) -> Result<(), GroupError> {
        if shape(value).ok() != Some((self.n, self.n)) {
            return Err(GroupError::InvalidElement(format!(
                "Element value must be an array with shape ({}, {}).",
                self.n, self.n
            )));
        }

        Ok(())
    }

    /// Multiplies two matrices.
    ///
    /// # Example
    ///
    /// ```
    /// # use groups::{GeneralLinearGroup, Group};
    /// let g2 = GeneralLinearGroup::<i64>::new(2);
    /// let a = vec![vec![1, 2], vec![3, 4]];
    /// let swap = vec![vec![0, 1], vec![1, 0]];
    /// assert_eq!(g2.operation(&a, &swap).unwrap(), vec![vec![2, 1], vec![4, 3]]);
    /// ```
    fn operation(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, GroupError> {
        matrix_mul(a, b)
    }

    fn fmt_value(&self, value: &Matrix<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_matrix(value))
    }
}

impl<T> Default for GeneralLinearGroup<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Clone for GeneralLinearGroup<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GeneralLinearGroup<T> {}

impl<T> PartialEq for GeneralLinearGroup<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
    }
}

impl<T> Eq for GeneralLinearGroup<T> {}

impl<T> Hash for GeneralLinearGroup<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
    }
}

impl<T> fmt::Display for GeneralLinearGroup<T>
where
    T: Num + Copy + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_label(self, f)
    }
}

impl<T> fmt::Debug for GeneralLinearGroup<T>
where
    T: Num + Copy + fmt::Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_constructor(self, f)
    }
}
