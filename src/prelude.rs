//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use dermaguide::prelude::*;
//! ```

pub use crate::data::DataFrame;
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{
    ConcernRecommendation, Product, ProductRecommender, SkinConcern, CONCERN_COLUMN,
    FEATURE_COLUMNS, PRODUCT_COLUMN,
};
pub use crate::similarity::{cosine_similarity, SimilarityMatrix};
pub use crate::traits::Transformer;
