use super::handlers::parse_menu::{__path_parse_menu, parse_menu};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Upload ceiling for the whole multipart body: the image limit plus room
/// for the other fields and boundaries.
const MAX_UPLOAD_BYTES: usize = 11 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(parse_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/v1/menu/parse", state.args.server.root_path),
            post(parse_menu),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
