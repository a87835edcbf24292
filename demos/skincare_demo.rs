//! # Skincare Recommendation Demo
//!
//! End-to-end walk-through of the dermaguide pipeline:
//! 1. Build an encoded survey table (one row per respondent)
//! 2. Fit the recommender (standardize features, compute the similarity
//!    matrix once)
//! 3. Query by user id, the way a form-based front-end would
//! 4. Query by skin concern, the way a dropdown front-end would

use dermaguide::prelude::*;

fn main() -> dermaguide::Result<()> {
    // An already-encoded survey: ordinal age group (0..=4), ordinal
    // monthly spend (0..=2), product codes (0..=5), concern codes (0..=5).
    let table = DataFrame::new(vec![
        (
            "Age Group".to_string(),
            Vector::from_slice(&[1.0, 2.0, 1.0, 3.0, 0.0, 2.0, 4.0, 1.0]),
        ),
        (
            "Monthly Spend".to_string(),
            Vector::from_slice(&[0.0, 1.0, 1.0, 2.0, 0.0, 2.0, 1.0, 0.0]),
        ),
        (
            "Skincare Products".to_string(),
            Vector::from_slice(&[0.0, 2.0, 4.0, 3.0, 5.0, 2.0, 1.0, 0.0]),
        ),
        (
            "Skin Concerns".to_string(),
            Vector::from_slice(&[0.0, 1.0, 0.0, 3.0, 4.0, 1.0, 5.0, 2.0]),
        ),
    ])?;

    println!("=== Fitting the recommender ===\n");
    let recommender = ProductRecommender::fit(&table)?;
    println!("Fitted over {} users\n", recommender.n_users());

    println!("=== Recommendations by user id ===\n");
    for user_id in [0, 4] {
        let recs = recommender.recommend_for_user(user_id, 3)?;
        println!("User {user_id}: {}", recs.join(", "));
    }

    // Out-of-range ids come back as a displayable message, not a crash.
    if let Err(err) = recommender.recommend_for_user(42, 3) {
        println!("User 42: {err}");
    }

    println!("\n=== Recommendations by skin concern ===\n");
    for concern in [
        SkinConcern::Acne,
        SkinConcern::DarkCircle,
        SkinConcern::DarkSpots,
        SkinConcern::FineLines,
        SkinConcern::Redness,
        SkinConcern::Wrinkles,
    ] {
        let outcome = recommender.recommend_for_concern(concern.code(), 2);
        match &outcome {
            ConcernRecommendation::Products(_) => {
                println!("{}: {outcome}", concern.name());
            }
            ConcernRecommendation::NoMatch { .. } => println!("{outcome}"),
        }
    }

    // Codes outside the catalog are tolerated too.
    println!("{}", recommender.recommend_for_concern(99, 2));

    Ok(())
}
