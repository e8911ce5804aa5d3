use super::handlers::{
    get_place::{__path_get_place, get_place},
    search_places::{__path_search_places, search_places},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_places, get_place))]
pub struct PlacesApiDoc;

pub fn places_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/v1/places/search", state.args.server.root_path),
            post(search_places),
        )
        .route(
            &format!("{}/api/v1/places/{{place_id}}", state.args.server.root_path),
            get(get_place),
        )
}
