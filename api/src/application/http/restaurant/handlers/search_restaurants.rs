use axum::extract::State;
use menulens_core::domain::restaurant::{
    entities::RestaurantSearchResult, ports::RestaurantService,
    value_objects::SearchRestaurantsInput,
};

use crate::application::http::{
    restaurant::validators::SearchRestaurantsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/search",
    tag = "restaurant",
    summary = "Search restaurants",
    description = "Searches Yelp for businesses matching a name near a location (up to 5 results).",
    request_body = SearchRestaurantsValidator,
    responses(
        (status = 200, body = RestaurantSearchResult),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse, description = "Yelp call failed or YELP_API_KEY not set")
    )
)]
pub async fn search_restaurants(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchRestaurantsValidator>,
) -> Result<Response<RestaurantSearchResult>, ApiError> {
    let result = state
        .service
        .search_restaurants(SearchRestaurantsInput {
            name: payload.name,
            location: payload.location,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
