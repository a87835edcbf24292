//! Content-based product recommendation over user similarity.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataFrame;
use crate::error::{DermaguideError, Result};
use crate::preprocessing::StandardScaler;
use crate::primitives::Matrix;
use crate::recommend::catalog::{Product, SkinConcern};
use crate::similarity::SimilarityMatrix;
use crate::traits::Transformer;

/// The two numeric survey columns used as the user feature vector.
pub const FEATURE_COLUMNS: [&str; 2] = ["Age Group", "Monthly Spend"];

/// Survey column holding each user's product code.
pub const PRODUCT_COLUMN: &str = "Skincare Products";

/// Survey column holding each user's skin concern code.
pub const CONCERN_COLUMN: &str = "Skin Concerns";

/// Outcome of a concern query.
///
/// "No user has this concern" is a valid informational outcome, not an
/// error; callers render it as a message rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConcernRecommendation {
    /// Ordered product display names, most similar user first.
    Products(Vec<&'static str>),
    /// No user in the table reported the queried concern. `concern` is the
    /// concern's display name, or "Unknown" for codes outside the catalog.
    NoMatch {
        /// Display name of the queried concern
        concern: &'static str,
    },
}

impl fmt::Display for ConcernRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcernRecommendation::Products(names) => write!(f, "{}", names.join(", ")),
            ConcernRecommendation::NoMatch { concern } => {
                write!(f, "No users with the specified skin concern: {concern}")
            }
        }
    }
}

/// Snapshot of the recommender's immutable state, persisted as one opaque
/// JSON blob. An internal cache artifact; no schema stability is promised
/// across builds.
#[derive(Serialize, Deserialize)]
struct RecommenderSnapshot {
    similarity: SimilarityMatrix,
    products: Vec<Product>,
    concerns: Vec<u8>,
}

/// Content-based product recommender.
///
/// Holds the all-pairs user similarity matrix together with each user's
/// product and concern codes. All state is built once (or injected) and
/// read-only afterwards, so queries are pure reads and the recommender can
/// be shared between concurrent readers without locking.
///
/// # Examples
///
/// ```
/// use dermaguide::prelude::*;
///
/// let sim = SimilarityMatrix::from_matrix(Matrix::from_vec(3, 3, vec![
///     1.0, 0.9, 0.2,
///     0.9, 1.0, 0.4,
///     0.2, 0.4, 1.0,
/// ]).expect("square matrix")).expect("valid similarity matrix");
/// let products = vec![Product::Cleanser, Product::Serum, Product::Toner];
///
/// let recommender = ProductRecommender::new(sim, products, vec![0, 1, 0])
///     .expect("lengths agree");
/// let recs = recommender.recommend_for_user(0, 2).expect("user 0 exists");
/// assert_eq!(recs, vec!["Serum", "Toner"]);
/// ```
#[derive(Debug, Clone)]
pub struct ProductRecommender {
    similarity: SimilarityMatrix,
    products: Vec<Product>,
    concerns: Vec<u8>,
}

impl ProductRecommender {
    /// Creates a recommender from precomputed state.
    ///
    /// The similarity matrix and the mappings are injected rather than read
    /// from globals, so tests can drive the lookup with small synthetic
    /// matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if the product or concern list length disagrees
    /// with the similarity matrix dimension.
    pub fn new(
        similarity: SimilarityMatrix,
        products: Vec<Product>,
        concerns: Vec<u8>,
    ) -> Result<Self> {
        let n = similarity.n_rows();
        if products.len() != n || concerns.len() != n {
            return Err(DermaguideError::DimensionMismatch {
                expected: format!("{n} products and {n} concerns for a {n}x{n} similarity matrix"),
                actual: format!("{} products, {} concerns", products.len(), concerns.len()),
            });
        }
        Ok(Self {
            similarity,
            products,
            concerns,
        })
    }

    /// Builds a recommender from a survey table.
    ///
    /// Selects the designated feature columns ([`FEATURE_COLUMNS`]),
    /// standardizes them to zero mean and unit variance, computes the
    /// all-pairs cosine similarity matrix once, and ingests the product and
    /// concern code columns. Similarity therefore always operates on the
    /// standardized feature representation.
    ///
    /// # Errors
    ///
    /// Returns [`DermaguideError::MissingColumn`] if a designated column is
    /// absent, or an error if a product code doesn't map into the catalog.
    pub fn fit(table: &DataFrame) -> Result<Self> {
        let features = table.select(&FEATURE_COLUMNS)?.to_matrix();
        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(&features)?;
        let similarity = SimilarityMatrix::from_rows(&scaled)?;

        let products = column_codes(table, PRODUCT_COLUMN)?
            .into_iter()
            .enumerate()
            .map(|(row, code)| {
                Product::from_code(code).ok_or_else(|| {
                    DermaguideError::Other(format!(
                        "Unknown product code {code} at row {row} of column '{PRODUCT_COLUMN}'"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let concerns = column_codes(table, CONCERN_COLUMN)?;

        Self::new(similarity, products, concerns)
    }

    /// Returns the number of users the recommender was built over.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.similarity.n_rows()
    }

    /// Recommends products for an existing user.
    ///
    /// Ranks every user by similarity to `user_id` and returns the top
    /// `top_n` users' product names, most similar first. Exactly
    /// `min(top_n, n - 1)` names come back: a table with fewer than
    /// `top_n + 1` users yields fewer than `top_n` names, never padded,
    /// and `top_n = 0` yields an empty list. Duplicates are possible when
    /// similar users share a product.
    ///
    /// A pure read of immutable state: identical arguments always yield
    /// identical output.
    ///
    /// # Errors
    ///
    /// Returns [`DermaguideError::InvalidUser`] if `user_id` is out of
    /// range; its `Display` text is the caller-facing message.
    pub fn recommend_for_user(&self, user_id: usize, top_n: usize) -> Result<Vec<&'static str>> {
        if user_id >= self.n_users() {
            return Err(DermaguideError::InvalidUser {
                user_id,
                n_users: self.n_users(),
            });
        }
        Ok(self.ranked_products(user_id, top_n))
    }

    /// Recommends products for a skin concern.
    ///
    /// Anchors on the first user (lowest id) whose stored concern code
    /// equals `concern_code` and ranks the rest of the table by similarity
    /// to that anchor, with the same selection rule as
    /// [`recommend_for_user`](Self::recommend_for_user). Codes outside the
    /// concern catalog are accepted; when no user matches, the outcome is
    /// [`ConcernRecommendation::NoMatch`] carrying the concern's display
    /// name (or "Unknown").
    ///
    /// The anchor is excluded from the results only when it ranks as the
    /// maximum of its own similarity row; another user tying the anchor's
    /// self-similarity at 1.0 can let the anchor appear in its own
    /// recommendations.
    #[must_use]
    pub fn recommend_for_concern(&self, concern_code: u8, top_n: usize) -> ConcernRecommendation {
        match self.concerns.iter().position(|&c| c == concern_code) {
            None => ConcernRecommendation::NoMatch {
                concern: SkinConcern::label_for(concern_code),
            },
            Some(anchor) => ConcernRecommendation::Products(self.ranked_products(anchor, top_n)),
        }
    }

    /// Saves the recommender state to a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = RecommenderSnapshot {
            similarity: self.similarity.clone(),
            products: self.products.clone(),
            concerns: self.concerns.clone(),
        };
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), &snapshot)
            .map_err(|e| DermaguideError::Serialization(e.to_string()))
    }

    /// Loads a recommender from a JSON snapshot file.
    ///
    /// The snapshot's parts are re-validated against each other, so a
    /// corrupt or inconsistent blob is rejected rather than trusted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the blob doesn't
    /// parse, or its parts disagree on the user count.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: RecommenderSnapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DermaguideError::Serialization(e.to_string()))?;
        Self::new(snapshot.similarity, snapshot.products, snapshot.concerns)
    }

    /// Maps the top-ranked similar users to product names.
    fn ranked_products(&self, row: usize, top_n: usize) -> Vec<&'static str> {
        self.top_similar(row, top_n)
            .into_iter()
            .map(|idx| self.products[idx].name())
            .collect()
    }

    /// Selects the `top_n` most similar users to `row`.
    ///
    /// Sorts the row's indices by similarity ascending with a stable sort,
    /// drops the single entry that sorts last, takes the last `top_n` of
    /// the remainder and reverses to descending similarity. Consequences:
    ///
    /// - the dropped entry is `row` itself whenever its self-similarity of
    ///   1.0 is the unique maximum; when another user ties at 1.0, the
    ///   highest-index tied user is dropped instead and `row` can appear
    ///   in its own results;
    /// - tied similarities keep ascending index order in the sort, so they
    ///   come out in descending index order after the reversal.
    fn top_similar(&self, row: usize, top_n: usize) -> Vec<usize> {
        let sims = self.similarity.row(row);
        let mut order: Vec<usize> = (0..sims.len()).collect();
        order.sort_by(|&a, &b| {
            sims[a]
                .partial_cmp(&sims[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        order.pop();
        let start = order.len().saturating_sub(top_n);
        let mut picked = order.split_off(start);
        picked.reverse();
        picked
    }
}

/// Reads a column of small integer codes.
fn column_codes(table: &DataFrame, name: &str) -> Result<Vec<u8>> {
    let col = table.column(name)?;
    let mut codes = Vec::with_capacity(col.len());
    for (row, &value) in col.as_slice().iter().enumerate() {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f32::from(u8::MAX) {
            return Err(DermaguideError::Other(format!(
                "Column '{name}' row {row}: {value} is not a valid survey code"
            )));
        }
        codes.push(value as u8);
    }
    Ok(codes)
}
