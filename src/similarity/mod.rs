//! Pairwise user similarity.
//!
//! This module computes cosine similarity between user feature vectors and
//! holds the resulting all-pairs matrix. The matrix is built once from a
//! feature matrix and is read-only afterwards, so it can be shared freely
//! between concurrent readers.
//!
//! # Quick Start
//!
//! ```
//! use dermaguide::similarity::{cosine_similarity, SimilarityMatrix};
//! use dermaguide::primitives::{Matrix, Vector};
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0]);
//! let v2 = Vector::from_slice(&[2.0, 4.0]);
//! let sim = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
//! assert!((sim - 1.0).abs() < 1e-5); // Same direction
//!
//! let features = Matrix::from_vec(3, 2, vec![
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 1.0,
//! ]).expect("valid matrix dimensions");
//! let matrix = SimilarityMatrix::from_rows(&features).expect("similarity should succeed");
//! assert_eq!(matrix.n_rows(), 3);
//! assert!((matrix.get(0, 0) - 1.0).abs() < 1e-6);
//! ```

use crate::error::{DermaguideError, Result};
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Compute cosine similarity between two vectors.
///
/// Cosine similarity measures the angle between two vectors.
/// Returns a value between -1 and 1, where:
/// - 1 = identical direction (very similar)
/// - 0 = orthogonal (unrelated)
/// - -1 = opposite direction (very dissimilar)
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// # Errors
///
/// Returns an error if the vectors differ in length or are empty.
///
/// # Examples
///
/// ```
/// use dermaguide::similarity::cosine_similarity;
/// use dermaguide::primitives::Vector;
///
/// let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
///
/// let sim = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
/// assert!(sim > 0.9); // Very similar
/// ```
pub fn cosine_similarity(a: &Vector<f32>, b: &Vector<f32>) -> Result<f32> {
    if a.len() != b.len() {
        return Err(DermaguideError::Other(
            "Vectors must have same length".to_string(),
        ));
    }

    if a.is_empty() {
        return Err(DermaguideError::Other("Vectors cannot be empty".to_string()));
    }

    let dot_product = a.dot(b);
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0); // Zero vector is orthogonal to everything
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Dense all-pairs cosine similarity between the rows of a feature matrix.
///
/// Symmetric with 1.0 on the diagonal (self-similarity). Built once;
/// immutable for the rest of the process lifetime. Memory cost is O(n²),
/// acceptable at survey scale (tens to low thousands of rows).
///
/// # Examples
///
/// ```
/// use dermaguide::similarity::SimilarityMatrix;
/// use dermaguide::primitives::Matrix;
///
/// let features = Matrix::from_vec(2, 2, vec![
///     1.0, 0.0,
///     2.0, 0.0,
/// ]).expect("valid matrix dimensions");
/// let sim = SimilarityMatrix::from_rows(&features).expect("similarity should succeed");
///
/// // Rows point the same way
/// assert!((sim.get(0, 1) - 1.0).abs() < 1e-5);
/// assert!((sim.get(0, 1) - sim.get(1, 0)).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    inner: Matrix<f32>,
}

impl SimilarityMatrix {
    /// Builds the all-pairs similarity matrix from a feature matrix
    /// (one row per user).
    ///
    /// Only the upper triangle is computed; values are mirrored into the
    /// lower triangle and the diagonal is fixed at 1.0.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature matrix has rows of zero width.
    pub fn from_rows(features: &Matrix<f32>) -> Result<Self> {
        let (n, n_features) = features.shape();

        if n > 0 && n_features == 0 {
            return Err("Feature matrix must have at least one column".into());
        }

        let mut inner = Matrix::zeros(n, n);
        for i in 0..n {
            inner.set(i, i, 1.0);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let sim = cosine_similarity(&features.row(i), &features.row(j))?;
                inner.set(i, j, sim);
                inner.set(j, i, sim);
            }
        }

        Ok(Self { inner })
    }

    /// Wraps a precomputed square similarity matrix.
    ///
    /// Used to inject small synthetic matrices into the lookup component
    /// and to restore snapshots. The values are taken as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn from_matrix(inner: Matrix<f32>) -> Result<Self> {
        let (rows, cols) = inner.shape();
        if rows != cols {
            return Err(DermaguideError::DimensionMismatch {
                expected: format!("{rows}x{rows}"),
                actual: format!("{rows}x{cols}"),
            });
        }
        Ok(Self { inner })
    }

    /// Returns the number of rows (== number of users).
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.inner.n_rows()
    }

    /// Gets the similarity between users `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.inner.get(i, j)
    }

    /// Returns user `i`'s full similarity vector (length n).
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> Vector<f32> {
        self.inner.row(i)
    }
}
