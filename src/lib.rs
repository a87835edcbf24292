//! Dermaguide: content-based skincare product recommendations in pure Rust.
//!
//! Dermaguide encodes tabular skincare survey data, computes an all-pairs
//! cosine similarity matrix between user feature vectors, and answers
//! product-recommendation queries against it: "recommend for this user"
//! and "recommend for this skin concern".
//!
//! # Quick Start
//!
//! ```
//! use dermaguide::prelude::*;
//!
//! // An encoded survey table: one row per user
//! let table = DataFrame::new(vec![
//!     ("Age Group".to_string(), Vector::from_slice(&[0.0, 2.0, 0.0, 2.0])),
//!     ("Monthly Spend".to_string(), Vector::from_slice(&[0.0, 2.0, 2.0, 0.0])),
//!     ("Skincare Products".to_string(), Vector::from_slice(&[0.0, 1.0, 2.0, 3.0])),
//!     ("Skin Concerns".to_string(), Vector::from_slice(&[0.0, 0.0, 1.0, 2.0])),
//! ]).unwrap();
//!
//! // Standardize features, build the similarity matrix, ingest codes
//! let recommender = ProductRecommender::fit(&table).unwrap();
//!
//! // Query by user id
//! let recs = recommender.recommend_for_user(0, 2).unwrap();
//! assert_eq!(recs.len(), 2);
//!
//! // Query by skin concern
//! let outcome = recommender.recommend_for_concern(0, 2);
//! assert!(matches!(outcome, ConcernRecommendation::Products(_)));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: DataFrame for named survey columns
//! - [`preprocessing`]: Data transformers (StandardScaler)
//! - [`similarity`]: Cosine similarity and the all-pairs similarity matrix
//! - [`recommend`]: Product/concern catalogs and the recommendation lookup
//! - [`error`]: Error types
//! - [`traits`]: Transformer trait

pub mod data;
pub mod error;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod recommend;
pub mod similarity;
pub mod traits;

pub use error::{DermaguideError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Transformer;
