use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    places::{
        entities::{GooglePlaceDetails, PlaceData, PlaceSearchResult},
        value_objects::SearchPlacesInput,
    },
};

/// Outbound Google Places client (legacy endpoints)
#[cfg_attr(test, mockall::automock)]
pub trait GooglePlacesClient: Send + Sync {
    /// Exact name + address lookup. Request failures are reported as a
    /// [`PlaceSearchResult::failed`] result, not an error.
    fn find_place_from_text(
        &self,
        query: String,
    ) -> impl Future<Output = Result<PlaceSearchResult, CoreError>> + Send;

    fn text_search(
        &self,
        query: String,
        location: Option<String>,
        radius: u32,
    ) -> impl Future<Output = Result<PlaceSearchResult, CoreError>> + Send;

    fn get_place_details(
        &self,
        place_id: String,
    ) -> impl Future<Output = Result<GooglePlaceDetails, CoreError>> + Send;

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Result<String, CoreError>;
}

/// Service trait for Google Places lookups
#[cfg_attr(test, mockall::automock)]
pub trait PlacesService: Send + Sync {
    fn search_places(
        &self,
        input: SearchPlacesInput,
    ) -> impl Future<Output = Result<PlaceSearchResult, CoreError>> + Send;

    fn get_place(
        &self,
        place_id: String,
    ) -> impl Future<Output = Result<PlaceData, CoreError>> + Send;
}
