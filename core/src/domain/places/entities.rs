use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::dishes::entities::PopularDish;

pub const STATUS_OK: &str = "OK";

/// Status reported when the Find Place call itself could not be made.
pub const STATUS_ERROR: &str = "ERROR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GooglePlacePhoto {
    pub photo_reference: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Place summary as returned by Find Place and Text Search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GooglePlace {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    /// 0 (free) to 4 (very expensive)
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub photos: Vec<GooglePlacePhoto>,
    #[serde(default)]
    pub business_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GooglePlaceReview {
    pub author_name: String,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub relative_time_description: String,
    #[serde(default)]
    pub text: String,
    /// Unix timestamp, seconds
    pub time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GooglePlaceDetails {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub geometry: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub opening_hours: Option<Value>,
    #[serde(default)]
    pub photos: Vec<GooglePlacePhoto>,
    /// Filled in by the service from `photos`, never by the API.
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<GooglePlaceReview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceSearchResult {
    pub results: Vec<GooglePlace>,
    pub status: String,
}

impl PlaceSearchResult {
    pub fn failed() -> Self {
        Self {
            results: Vec::new(),
            status: STATUS_ERROR.to_string(),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.status == STATUS_OK && !self.results.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceData {
    pub place: GooglePlaceDetails,
    pub reviews: Vec<GooglePlaceReview>,
    pub popular_dishes: Vec<PopularDish>,
    /// Always null until results are cached.
    pub cached_at: Option<String>,
}
