use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dishes::{entities::DEFAULT_TOP_N, ports::DishService},
    llm_output::ports::LLMClient,
    places::{
        entities::{PlaceData, PlaceSearchResult},
        ports::{GooglePlacesClient, PlacesService},
        value_objects::{
            DEFAULT_SEARCH_RADIUS_METERS, MAX_PHOTO_URLS, PHOTO_MAX_WIDTH, SearchPlacesInput,
        },
    },
    restaurant::ports::YelpClient,
};

impl<LLM, Y, GP> PlacesService for Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    #[instrument(skip(self))]
    async fn search_places(&self, input: SearchPlacesInput) -> Result<PlaceSearchResult, CoreError> {
        if input.query.trim().is_empty() {
            return Err(CoreError::InvalidInput("query is required".to_string()));
        }

        if input.use_exact_match {
            let exact = self
                .places_client
                .find_place_from_text(input.query.clone())
                .await?;

            if exact.is_hit() {
                info!("Exact match found: {} place(s)", exact.results.len());
                return Ok(exact);
            }
            info!(
                "Exact match not found (status: {}), falling back to text search",
                exact.status
            );
        }

        self.places_client
            .text_search(
                input.query,
                input.location_bias,
                DEFAULT_SEARCH_RADIUS_METERS,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn get_place(&self, place_id: String) -> Result<PlaceData, CoreError> {
        self.llm_client.ensure_configured()?;

        let mut place = self.places_client.get_place_details(place_id).await?;

        place.photo_urls = place
            .photos
            .iter()
            .take(MAX_PHOTO_URLS)
            .map(|photo| {
                self.places_client
                    .photo_url(&photo.photo_reference, PHOTO_MAX_WIDTH)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let reviews = place.reviews.clone();
        let review_texts: Vec<String> = reviews
            .iter()
            .filter(|review| !review.text.is_empty())
            .map(|review| review.text.clone())
            .collect();

        let popular_dishes = if review_texts.is_empty() {
            info!("No reviews available for dish extraction");
            Vec::new()
        } else {
            info!("Extracting popular dishes from {} reviews", review_texts.len());
            self.extract_popular_dishes(review_texts, DEFAULT_TOP_N).await
        };

        Ok(PlaceData {
            place,
            reviews,
            popular_dishes,
            cached_at: None,
        })
    }
}
