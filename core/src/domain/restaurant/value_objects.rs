/// Results requested from business search.
pub const SEARCH_LIMIT: u32 = 5;

/// Reviews requested per business; the Yelp API returns at most 3.
pub const REVIEW_LIMIT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRestaurantsInput {
    pub name: String,
    pub location: String,
}
