//! Integration tests for the dermaguide recommendation library.
//!
//! These tests verify end-to-end workflows combining multiple components.

use dermaguide::prelude::*;
use dermaguide::DermaguideError;

/// A 5-user survey table whose standardized feature vectors land on the
/// four corners (±a, ±a) plus the origin, so every pairwise cosine is
/// -1, 0, or 1 and rankings are exact.
fn five_user_table() -> DataFrame {
    DataFrame::new(vec![
        (
            "Age Group".to_string(),
            Vector::from_slice(&[0.0, 2.0, 0.0, 2.0, 1.0]),
        ),
        (
            "Monthly Spend".to_string(),
            Vector::from_slice(&[0.0, 2.0, 2.0, 0.0, 1.0]),
        ),
        (
            "Skincare Products".to_string(),
            Vector::from_slice(&[0.0, 2.0, 4.0, 1.0, 2.0]),
        ),
        (
            "Skin Concerns".to_string(),
            Vector::from_slice(&[0.0, 0.0, 1.0, 2.0, 0.0]),
        ),
    ])
    .expect("valid survey table")
}

#[test]
fn test_survey_recommendation_workflow() {
    let table = five_user_table();
    let recommender = ProductRecommender::fit(&table).expect("Failed to fit recommender");
    assert_eq!(recommender.n_users(), 5);

    // User 0 standardizes to (-a, -a): user 1 is opposite (-1), users 2
    // and 3 are orthogonal (0), user 4 is the zero vector (0). The three
    // ties at 0 rank by descending index after the reversal.
    let recs = recommender
        .recommend_for_user(0, 2)
        .expect("user 0 is in range");
    assert_eq!(recs, vec!["Moisturizer", "Exfoliant"]);

    // User 4 is the zero vector: everyone scores 0 against it, so the
    // ranking is purely the tie-break.
    let recs = recommender
        .recommend_for_user(4, 2)
        .expect("user 4 is in range");
    assert_eq!(recs, vec!["Exfoliant", "Sunscreen"]);
}

#[test]
fn test_concern_query_anchors_on_first_matching_user() {
    let table = five_user_table();
    let recommender = ProductRecommender::fit(&table).expect("Failed to fit recommender");

    // Concern 0 (Acne) first appears at user 0, so the answer matches the
    // user-0 query exactly.
    let outcome = recommender.recommend_for_concern(0, 2);
    assert_eq!(
        outcome,
        ConcernRecommendation::Products(vec!["Moisturizer", "Exfoliant"])
    );

    let direct = recommender
        .recommend_for_user(0, 2)
        .expect("user 0 is in range");
    assert_eq!(outcome, ConcernRecommendation::Products(direct));
}

#[test]
fn test_concern_query_no_match_outcomes() {
    let table = five_user_table();
    let recommender = ProductRecommender::fit(&table).expect("Failed to fit recommender");

    // Fine lines is in the catalog, but no user reported it.
    let outcome = recommender.recommend_for_concern(3, 2);
    assert_eq!(
        outcome,
        ConcernRecommendation::NoMatch {
            concern: "Fine lines"
        }
    );

    // Code 99 is outside the catalog entirely; still an informational
    // outcome, never a crash.
    let outcome = recommender.recommend_for_concern(99, 2);
    assert_eq!(
        outcome,
        ConcernRecommendation::NoMatch { concern: "Unknown" }
    );
    assert_eq!(
        outcome.to_string(),
        "No users with the specified skin concern: Unknown"
    );
}

#[test]
fn test_two_user_table_caps_results() {
    let table = DataFrame::new(vec![
        ("Age Group".to_string(), Vector::from_slice(&[0.0, 2.0])),
        ("Monthly Spend".to_string(), Vector::from_slice(&[1.0, 0.0])),
        (
            "Skincare Products".to_string(),
            Vector::from_slice(&[5.0, 3.0]),
        ),
        (
            "Skin Concerns".to_string(),
            Vector::from_slice(&[4.0, 4.0]),
        ),
    ])
    .expect("valid survey table");
    let recommender = ProductRecommender::fit(&table).expect("Failed to fit recommender");

    // Asking for two recommendations from a two-user table yields one:
    // the only other user.
    let recs = recommender
        .recommend_for_user(0, 2)
        .expect("user 0 is in range");
    assert_eq!(recs, vec!["Serum"]);

    let outcome = recommender.recommend_for_concern(4, 2);
    assert_eq!(outcome, ConcernRecommendation::Products(vec!["Serum"]));
}

#[test]
fn test_invalid_user_id_is_displayable_error() {
    let table = five_user_table();
    let recommender = ProductRecommender::fit(&table).expect("Failed to fit recommender");

    let err = recommender.recommend_for_user(5, 2).unwrap_err();
    assert!(matches!(
        err,
        DermaguideError::InvalidUser {
            user_id: 5,
            n_users: 5
        }
    ));
    // The Display text is what a front-end shows the user.
    assert!(err.to_string().contains("Invalid user id 5"));
}

#[test]
fn test_missing_column_aborts_fit() {
    let table = DataFrame::new(vec![
        ("Age Group".to_string(), Vector::from_slice(&[0.0, 1.0])),
        (
            "Skincare Products".to_string(),
            Vector::from_slice(&[0.0, 1.0]),
        ),
        (
            "Skin Concerns".to_string(),
            Vector::from_slice(&[0.0, 1.0]),
        ),
    ])
    .expect("valid table");

    let err = ProductRecommender::fit(&table).unwrap_err();
    assert!(matches!(
        err,
        DermaguideError::MissingColumn { ref column } if column == "Monthly Spend"
    ));
}

#[test]
fn test_similarity_matrix_invariants_after_standardization() {
    let table = five_user_table();
    let features = table
        .select(&FEATURE_COLUMNS)
        .expect("feature columns exist")
        .to_matrix();
    let mut scaler = StandardScaler::new();
    let scaled = scaler
        .fit_transform(&features)
        .expect("fit_transform should succeed");
    let sim = SimilarityMatrix::from_rows(&scaled).expect("similarity builds");

    assert_eq!(sim.n_rows(), 5);
    for i in 0..5 {
        assert!((sim.get(i, i) - 1.0).abs() < 1e-6);
        for j in 0..5 {
            assert!((sim.get(i, j) - sim.get(j, i)).abs() < 1e-6);
            assert!(sim.get(i, j) >= -1.0 - 1e-5 && sim.get(i, j) <= 1.0 + 1e-5);
        }
    }
}

#[test]
fn test_pipeline_matches_manual_stages() {
    let table = five_user_table();
    let fitted = ProductRecommender::fit(&table).expect("Failed to fit recommender");

    // The same stages, assembled by hand.
    let features = table
        .select(&FEATURE_COLUMNS)
        .expect("feature columns exist")
        .to_matrix();
    let mut scaler = StandardScaler::new();
    let scaled = scaler
        .fit_transform(&features)
        .expect("fit_transform should succeed");
    let sim = SimilarityMatrix::from_rows(&scaled).expect("similarity builds");
    let products = vec![
        Product::Cleanser,
        Product::Moisturizer,
        Product::Sunscreen,
        Product::Exfoliant,
        Product::Moisturizer,
    ];
    let manual =
        ProductRecommender::new(sim, products, vec![0, 0, 1, 2, 0]).expect("lengths agree");

    for user_id in 0..5 {
        assert_eq!(
            fitted
                .recommend_for_user(user_id, 3)
                .expect("user is in range"),
            manual
                .recommend_for_user(user_id, 3)
                .expect("user is in range"),
        );
    }
}

#[test]
fn test_snapshot_round_trip_preserves_answers() {
    let table = five_user_table();
    let recommender = ProductRecommender::fit(&table).expect("Failed to fit recommender");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("derma_snapshot.json");
    recommender.save(&path).expect("save succeeds");

    // Reload at "startup" instead of recomputing.
    let restored = ProductRecommender::load(&path).expect("load succeeds");
    assert_eq!(restored.n_users(), recommender.n_users());
    for user_id in 0..recommender.n_users() {
        assert_eq!(
            restored
                .recommend_for_user(user_id, 2)
                .expect("user is in range"),
            recommender
                .recommend_for_user(user_id, 2)
                .expect("user is in range"),
        );
    }
    for concern in [0u8, 1, 2, 3, 99] {
        assert_eq!(
            restored.recommend_for_concern(concern, 2),
            recommender.recommend_for_concern(concern, 2)
        );
    }
}
