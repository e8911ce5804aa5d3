use axum::extract::{Path, State};
use menulens_core::domain::places::{entities::PlaceData, ports::PlacesService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{place_id}",
    tag = "places",
    summary = "Get place",
    description = "Returns place details with up to 5 photo URLs, its reviews and the dishes those reviews mention most.",
    params(
        ("place_id" = String, Path, description = "Google Place ID"),
    ),
    responses(
        (status = 200, body = PlaceData),
        (status = 404, body = ApiErrorResponse, description = "Place not found"),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_place(
    Path(place_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<PlaceData>, ApiError> {
    let data = state
        .service
        .get_place(place_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(data))
}
