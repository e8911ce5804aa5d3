use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchPlacesValidator {
    #[validate(length(min = 1, message = "query is required"))]
    #[schema(example = "best sushi downtown")]
    pub query: String,
    /// Appended to the query, e.g. "Seattle"
    #[schema(example = "Seattle")]
    pub location: Option<String>,
}
