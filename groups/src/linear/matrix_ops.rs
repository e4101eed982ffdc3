use crate::errors::GroupError;
use crate::linear::Matrix;

use itertools::Itertools;
use num_traits::{Float, Num};

/// Returns `(rows, cols)` of a matrix.
///
/// An empty matrix has shape `(0, 0)`.
///
/// # Errors
///
/// Returns `GroupError::DimensionMismatch` if the rows have inconsistent lengths.
pub fn shape<T>(matrix: &Matrix<T>) -> Result<(usize, usize), GroupError> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != cols {
            return Err(GroupError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                cols
            )));
        }
    }

    Ok((rows, cols))
}

/// Computes the matrix product `C = AB`.
///
/// # Errors
///
/// Returns `GroupError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul<T: Num + Copy>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, GroupError> {
    let (n, m_common) = shape(a)?;
    let (b_rows, p) = shape(b)?;

    if b_rows != m_common {
        return Err(GroupError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common, b_rows
        )));
    }

    let mut c = vec![vec![T::zero(); p]; n];
    for i in 0..n {
        for j in 0..p {
            c[i][j] = (0..m_common).fold(T::zero(), |sum, k| sum + a[i][k] * b[k][j]);
        }
    }

    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix<T: Num + Copy>(n: usize) -> Matrix<T> {
    let mut identity = vec![vec![T::zero(); n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = T::one();
    }
    identity
}

/// Compares two matrices entrywise within an absolute tolerance.
///
/// Matrices of different shapes are never equal.
pub fn approx_eq<T: Float>(a: &Matrix<T>, b: &Matrix<T>, tolerance: T) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(row_a, row_b)| {
            row_a.len() == row_b.len()
                && row_a
                    .iter()
                    .zip(row_b)
                    .all(|(&x, &y)| (x - y).abs() <= tolerance)
        })
}

/// Renders a matrix as nested brackets, e.g. `[[1, 0], [0, 1]]`.
pub fn format_matrix<T: std::fmt::Display>(matrix: &Matrix<T>) -> String {
    format!(
        "[{}]",
        matrix
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join(", ")
    )
}
