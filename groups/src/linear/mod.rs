//! # Linear Groups Module
//!
//! Provides the [`GeneralLinearGroup`] family and the dense matrix helpers it
//! is built on.

pub mod math;
pub mod matrix_ops;

/// Represents a mathematical matrix using a `Vec<Vec<T>>`, row-major.
pub type Matrix<T = f64> = Vec<Vec<T>>;

pub use math::GeneralLinearGroup;
