use axum::extract::{Path, State};
use menulens_core::domain::restaurant::{entities::RestaurantData, ports::RestaurantService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{business_id}",
    tag = "restaurant",
    summary = "Get restaurant",
    description = "Returns Yelp business details, up to 3 reviews and the dishes those reviews mention most.",
    params(
        ("business_id" = String, Path, description = "Yelp business ID"),
    ),
    responses(
        (status = 200, body = RestaurantData),
        (status = 404, body = ApiErrorResponse, description = "Business not found"),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_restaurant(
    Path(business_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<RestaurantData>, ApiError> {
    let data = state
        .service
        .get_restaurant(business_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(data))
}
