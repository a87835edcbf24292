//! Similarity-based product recommendation.
//!
//! This module answers the two query shapes of the recommendation demo:
//! "recommend for this user" and "recommend for this skin concern". Both
//! rank rows of a precomputed all-pairs similarity matrix and map the
//! top-ranked users' stored product codes to display names.
//!
//! # Quick Start
//!
//! ```
//! use dermaguide::prelude::*;
//!
//! let table = DataFrame::new(vec![
//!     ("Age Group".to_string(), Vector::from_slice(&[0.0, 2.0, 0.0, 2.0])),
//!     ("Monthly Spend".to_string(), Vector::from_slice(&[0.0, 2.0, 2.0, 0.0])),
//!     ("Skincare Products".to_string(), Vector::from_slice(&[0.0, 1.0, 2.0, 3.0])),
//!     ("Skin Concerns".to_string(), Vector::from_slice(&[0.0, 0.0, 1.0, 2.0])),
//! ]).expect("valid survey table");
//!
//! let recommender = ProductRecommender::fit(&table).expect("table has the designated columns");
//!
//! let recs = recommender.recommend_for_user(0, 2).expect("user 0 exists");
//! assert_eq!(recs.len(), 2);
//! ```

pub mod catalog;
pub mod content_based;

pub use catalog::{Product, SkinConcern};
pub use content_based::{
    ConcernRecommendation, ProductRecommender, CONCERN_COLUMN, FEATURE_COLUMNS, PRODUCT_COLUMN,
};
