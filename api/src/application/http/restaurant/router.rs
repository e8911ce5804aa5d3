use super::handlers::{
    get_restaurant::{__path_get_restaurant, get_restaurant},
    search_restaurants::{__path_search_restaurants, search_restaurants},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_restaurants, get_restaurant))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/v1/restaurant/search", state.args.server.root_path),
            post(search_restaurants),
        )
        .route(
            &format!(
                "{}/api/v1/restaurant/{{business_id}}",
                state.args.server.root_path
            ),
            get(get_restaurant),
        )
}
