use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dishes::{entities::DEFAULT_TOP_N, ports::DishService},
    llm_output::ports::LLMClient,
    places::ports::GooglePlacesClient,
    restaurant::{
        entities::{RestaurantData, RestaurantSearchResult},
        ports::{RestaurantService, YelpClient},
        value_objects::{REVIEW_LIMIT, SEARCH_LIMIT, SearchRestaurantsInput},
    },
};

impl<LLM, Y, GP> RestaurantService for Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    #[instrument(skip(self))]
    async fn search_restaurants(
        &self,
        input: SearchRestaurantsInput,
    ) -> Result<RestaurantSearchResult, CoreError> {
        if input.name.trim().is_empty() || input.location.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "name and location are required".to_string(),
            ));
        }

        let result = self
            .yelp_client
            .search_businesses(input.name, input.location, SEARCH_LIMIT)
            .await?;

        info!(
            "Found {} businesses (total: {})",
            result.businesses.len(),
            result.total
        );

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get_restaurant(&self, business_id: String) -> Result<RestaurantData, CoreError> {
        self.llm_client.ensure_configured()?;

        let business = self.yelp_client.get_business(business_id.clone()).await?;
        let reviews = self
            .yelp_client
            .get_reviews(business_id, REVIEW_LIMIT)
            .await?;

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

        Ok(RestaurantData {
            business,
            reviews,
            popular_dishes,
            cached_at: None,
        })
    }
}
