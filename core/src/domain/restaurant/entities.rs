use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dishes::entities::PopularDish;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YelpCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YelpLocation {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub display_address: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YelpCategory {
    pub alias: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YelpBusiness {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub url: String,
    pub rating: f64,
    pub review_count: u32,
    /// "$" to "$$$$"
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub categories: Vec<YelpCategory>,
    pub location: YelpLocation,
    #[serde(default)]
    pub coordinates: Option<YelpCoordinates>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub display_phone: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YelpUser {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct YelpReview {
    pub id: String,
    pub url: String,
    pub text: String,
    pub rating: u8,
    pub time_created: String,
    pub user: YelpUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSearchResult {
    pub businesses: Vec<YelpBusiness>,
    #[serde(default)]
    pub total: u32,
}

/// A business with its reviews and the dishes those reviews mention most.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantData {
    pub business: YelpBusiness,
    pub reviews: Vec<YelpReview>,
    pub popular_dishes: Vec<PopularDish>,
    /// Always null until results are cached.
    pub cached_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_business_deserializes_with_missing_optionals() {
        let business: YelpBusiness = serde_json::from_value(json!({
            "id": "tartine-bakery-san-francisco",
            "name": "Tartine Bakery",
            "url": "https://www.yelp.com/biz/tartine-bakery-san-francisco",
            "rating": 4.5,
            "review_count": 9000,
            "location": { "city": "San Francisco", "display_address": ["600 Guerrero St"] },
            "is_closed": false
        }))
        .unwrap();

        assert_eq!(business.location.city.as_deref(), Some("San Francisco"));
        assert!(business.categories.is_empty());
        assert_eq!(business.coordinates, None);
        assert_eq!(business.price, None);
    }
}
