use axum::extract::State;
use menulens_core::domain::places::{
    entities::PlaceSearchResult, ports::PlacesService, value_objects::SearchPlacesInput,
};

use crate::application::http::{
    places::validators::SearchPlacesValidator,
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
    tag = "places",
    summary = "Search places",
    description = "Google Places text search for the query, with the optional location appended to it.",
    request_body = SearchPlacesValidator,
    responses(
        (status = 200, body = PlaceSearchResult),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse, description = "Places call failed or GOOGLE_PLACES_API_KEY not set")
    )
)]
pub async fn search_places(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchPlacesValidator>,
) -> Result<Response<PlaceSearchResult>, ApiError> {
    // Text search rather than exact match, so vague queries return several places
    let input = SearchPlacesInput::text_query(&payload.query, payload.location.as_deref());

    let result = state
        .service
        .search_places(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
