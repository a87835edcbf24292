//! Preprocessing transformers for data standardization.
//!
//! # Example
//!
//! ```
//! use dermaguide::prelude::*;
//!
//! // Ordinal survey columns with different scales
//! let data = Matrix::from_vec(4, 2, vec![
//!     0.0, 0.0,
//!     1.0, 1.0,
//!     2.0, 1.0,
//!     3.0, 2.0,
//! ]).expect("valid matrix dimensions");
//!
//! // Standardize to zero mean and unit variance
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! // Each column now has mean ≈ 0
//! let col = scaled.column(0);
//! assert!(col.mean().abs() < 1e-5);
//! ```

use crate::error::{DermaguideError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Standardizes features by removing mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std
///
/// The recommendation pipeline applies this to the two ordinal feature
/// columns so cosine similarity compares directions of standardized
/// feature vectors rather than raw ordinal magnitudes.
///
/// # Example
///
/// ```
/// use dermaguide::prelude::*;
///
/// let data = Matrix::from_vec(3, 2, vec![
///     0.0, 0.0,
///     1.0, 10.0,
///     2.0, 20.0,
/// ]).expect("valid matrix dimensions");
///
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
///
/// // Verify standardization
/// let (n_rows, n_cols) = scaled.shape();
/// for j in 0..n_cols {
///     let mut sum = 0.0;
///     for i in 0..n_rows {
///         sum += scaled.get(i, j);
///     }
///     let mean = sum / n_rows as f32;
///     assert!(mean.abs() < 1e-5, "Mean should be ~0");
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature (computed during fit).
    mean: Option<Vec<f32>>,
    /// Standard deviation of each feature (computed during fit).
    std: Option<Vec<f32>>,
    /// Whether to center the data (subtract mean).
    with_mean: bool,
    /// Whether to scale the data (divide by std).
    with_std: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    /// Creates a new `StandardScaler` with default settings.
    ///
    /// By default, both centering (subtract mean) and scaling (divide by std)
    /// are enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
            with_mean: true,
            with_std: true,
        }
    }

    /// Sets whether to center the data by subtracting the mean.
    #[must_use]
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Sets whether to scale the data by dividing by standard deviation.
    #[must_use]
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Returns the mean of each feature.
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        self.mean
            .as_ref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns the standard deviation of each feature.
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        self.std
            .as_ref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }
}

impl Transformer for StandardScaler {
    /// Computes the mean and standard deviation of each feature.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err("Cannot fit with zero samples".into());
        }

        // Compute mean for each feature
        let mut mean = vec![0.0; n_features];
        for (j, mean_j) in mean.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in 0..n_samples {
                sum += x.get(i, j);
            }
            *mean_j = sum / n_samples as f32;
        }

        // Compute standard deviation for each feature
        let mut std = vec![0.0; n_features];
        for (j, std_j) in std.iter_mut().enumerate() {
            let mut sum_sq = 0.0;
            for i in 0..n_samples {
                let diff = x.get(i, j) - mean[j];
                sum_sq += diff * diff;
            }
            // Use population std (divide by n, not n-1) like sklearn
            *std_j = (sum_sq / n_samples as f32).sqrt();
        }

        self.mean = Some(mean);
        self.std = Some(std);

        Ok(())
    }

    /// Standardizes the data using fitted mean and std.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let mean = self
            .mean
            .as_ref()
            .ok_or_else(|| DermaguideError::from("Scaler not fitted"))?;
        let std = self
            .std
            .as_ref()
            .ok_or_else(|| DermaguideError::from("Scaler not fitted"))?;

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err("Feature dimension mismatch".into());
        }

        let mut result = vec![0.0; n_samples * n_features];

        for i in 0..n_samples {
            for j in 0..n_features {
                let mut val = x.get(i, j);

                // Center
                if self.with_mean {
                    val -= mean[j];
                }

                // Scale; constant columns stay centered
                if self.with_std && std[j] > 1e-10 {
                    val /= std[j];
                }

                result[i * n_features + j] = val;
            }
        }

        Matrix::from_vec(n_samples, n_features, result).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let scaler = StandardScaler::new();
        assert!(!scaler.is_fitted());
    }

    #[test]
    fn test_default_same_as_new() {
        let scaler = StandardScaler::default();
        assert!(!scaler.is_fitted());
    }

    #[test]
    fn test_fit_computes_mean_and_std() {
        let mut scaler = StandardScaler::new();
        let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("matrix");
        scaler.fit(&x).expect("fit should succeed");

        assert!(scaler.is_fitted());
        assert!((scaler.mean()[0] - 2.5).abs() < 1e-6);
        // Population std of [1,2,3,4] = sqrt(1.25)
        assert!((scaler.std()[0] - 1.25_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_fit_transform_standardizes() {
        let mut scaler = StandardScaler::new();
        let x = Matrix::from_vec(4, 2, vec![0.0, 0.0, 1.0, 10.0, 2.0, 20.0, 3.0, 30.0])
            .expect("matrix");
        let scaled = scaler.fit_transform(&x).expect("fit_transform");

        for j in 0..2 {
            let col = scaled.column(j);
            assert!(col.mean().abs() < 1e-5, "column {j} mean should be ~0");
            assert!(
                (col.variance() - 1.0).abs() < 1e-4,
                "column {j} variance should be ~1"
            );
        }
    }

    #[test]
    fn test_transform_without_fit_errors() {
        let scaler = StandardScaler::new();
        let x = Matrix::from_vec(2, 1, vec![1.0, 2.0]).expect("matrix");
        assert!(scaler.transform(&x).is_err());
    }

    #[test]
    fn test_fit_zero_samples_errors() {
        let mut scaler = StandardScaler::new();
        let x = Matrix::from_vec(0, 2, vec![]).expect("matrix");
        assert!(scaler.fit(&x).is_err());
    }

    #[test]
    fn test_transform_feature_mismatch_errors() {
        let mut scaler = StandardScaler::new();
        let x = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("matrix");
        scaler.fit(&x).expect("fit should succeed");

        let wrong = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("matrix");
        assert!(scaler.transform(&wrong).is_err());
    }

    #[test]
    fn test_constant_column_stays_centered() {
        // A constant column has std 0; scaling is skipped and the column
        // collapses to 0.0 everywhere.
        let mut scaler = StandardScaler::new();
        let x = Matrix::from_vec(3, 1, vec![5.0, 5.0, 5.0]).expect("matrix");
        let scaled = scaler.fit_transform(&x).expect("fit_transform");
        for i in 0..3 {
            assert!((scaled.get(i, 0) - 0.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_with_mean_disabled() {
        let mut scaler = StandardScaler::new().with_mean(false);
        let x = Matrix::from_vec(2, 1, vec![2.0, 4.0]).expect("matrix");
        let scaled = scaler.fit_transform(&x).expect("fit_transform");
        // std of [2,4] = 1.0, so values pass through divided by 1.0
        assert!((scaled.get(0, 0) - 2.0).abs() < 1e-6);
        assert!((scaled.get(1, 0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_with_std_disabled() {
        let mut scaler = StandardScaler::new().with_std(false);
        let x = Matrix::from_vec(2, 1, vec![2.0, 4.0]).expect("matrix");
        let scaled = scaler.fit_transform(&x).expect("fit_transform");
        // Centered only: mean 3.0
        assert!((scaled.get(0, 0) + 1.0).abs() < 1e-6);
        assert!((scaled.get(1, 0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refit_overwrites_parameters() {
        let mut scaler = StandardScaler::new();
        let x1 = Matrix::from_vec(2, 1, vec![0.0, 2.0]).expect("matrix");
        scaler.fit(&x1).expect("fit should succeed");
        assert!((scaler.mean()[0] - 1.0).abs() < 1e-6);

        let x2 = Matrix::from_vec(2, 1, vec![10.0, 20.0]).expect("matrix");
        scaler.fit(&x2).expect("refit should succeed");
        assert!((scaler.mean()[0] - 15.0).abs() < 1e-6);
    }
}
