pub mod advisory;
pub mod keywords;
pub mod normalize;
pub mod quantify;
pub mod readability;
pub mod rules;
pub mod score;

pub use advisory::{AdvisoryError, AdvisoryReview, AdvisoryReviewer};
pub use normalize::normalize;
pub use score::ScoringEngine;
