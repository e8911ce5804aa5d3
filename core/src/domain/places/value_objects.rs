/// Location bias radius for text search, in meters.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 50_000;

pub const MAX_PHOTO_URLS: usize = 5;
pub const PHOTO_MAX_WIDTH: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlacesInput {
    pub query: String,
    /// "lat,lng" to bias text search results around.
    pub location_bias: Option<String>,
    /// Try Find Place before falling back to text search.
    pub use_exact_match: bool,
}

impl SearchPlacesInput {
    /// Free-text search: the location, when given, is appended to the query
    /// rather than used as a coordinate bias.
    pub fn text_query(query: &str, location: Option<&str>) -> Self {
        let query = match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(location) => format!("{query} {location}"),
            None => query.to_string(),
        };

        Self {
            query,
            location_bias: None,
            use_exact_match: false,
        }
    }
}
