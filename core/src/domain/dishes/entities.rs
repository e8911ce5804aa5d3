use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentiment reported for every dish until review sentiment is actually scored.
pub const PLACEHOLDER_SENTIMENT: f64 = 0.8;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PopularDish {
    pub name: String,
    pub mention_count: u32,
    pub avg_sentiment: f64,
    pub sample_reviews: Vec<String>,
}

impl PopularDish {
    pub fn new(name: String, mention_count: u32) -> Self {
        Self {
            name,
            mention_count,
            avg_sentiment: PLACEHOLDER_SENTIMENT,
            sample_reviews: Vec::new(),
        }
    }
}
