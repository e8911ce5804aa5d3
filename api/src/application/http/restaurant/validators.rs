use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchRestaurantsValidator {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Tartine Bakery")]
    pub name: String,
    /// City, state or zip code
    #[validate(length(min = 1, message = "location is required"))]
    #[schema(example = "San Francisco, CA")]
    pub location: String,
}
