use crate::application::http::{
    menu::router::MenuApiDoc, places::router::PlacesApiDoc,
    restaurant::router::RestaurantApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MenuLens API",
        description = "Menu photo parsing and restaurant lookups with popular dishes"
    ),
    paths(crate::application::http::health::health_check),
    nest(
        (path = "/api/v1/menu", api = MenuApiDoc),
        (path = "/api/v1/restaurant", api = RestaurantApiDoc),
        (path = "/api/v1/places", api = PlacesApiDoc),
    )
)]
pub struct ApiDoc;
