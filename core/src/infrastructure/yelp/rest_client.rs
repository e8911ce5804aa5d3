use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{error, info, warn};
use url::Url;

use crate::domain::{
    common::{YelpConfig, entities::app_errors::CoreError},
    restaurant::{
        entities::{RestaurantSearchResult, YelpBusiness, YelpReview},
        ports::YelpClient,
    },
};

const API_KEY_VARIABLE: &str = "YELP_API_KEY";

/// The reviews endpoint never returns more than this many reviews.
const MAX_REVIEWS: u32 = 3;

/// Yelp Fusion v3 client authenticated with a bearer API key.
#[derive(Debug, Clone)]
pub struct YelpRestClient {
    api_key: Option<String>,
    api_base: Url,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<YelpReview>,
}

impl YelpRestClient {
    pub fn new(config: YelpConfig) -> Result<Self, CoreError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| CoreError::InvalidInput(format!("Invalid Yelp API base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::ExternalServiceError(format!("Failed to build Yelp HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: config.api_key.filter(|key| !key.trim().is_empty()),
            api_base,
            client,
        })
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key
            .as_deref()
            .ok_or(CoreError::MissingConfiguration(API_KEY_VARIABLE))
    }

    /// Appends percent-encoded path segments to the API base.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CoreError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::InvalidInput("Yelp API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(
        &self,
        api_key: &str,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Response, reqwest::Error> {
        self.client
            .get(url)
            .bearer_auth(api_key)
            .query(query)
            .send()
            .await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Yelp API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Yelp API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse Yelp response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Yelp response: {}", e))
        })
    }
}

fn transport_error(e: reqwest::Error) -> CoreError {
    error!("Yelp API request failed: {}", e);
    CoreError::ExternalServiceError(format!("Yelp API error: {}", e))
}

impl YelpClient for YelpRestClient {
    async fn search_businesses(
        &self,
        term: String,
        location: String,
        limit: u32,
    ) -> Result<RestaurantSearchResult, CoreError> {
        let api_key = self.api_key()?;
        info!("Searching Yelp for: {} in {}", term, location);

        let url = self.endpoint(&["businesses", "search"])?;
        let response = self
            .get(
                api_key,
                url,
                &[
                    ("term", term),
                    ("location", location),
                    ("limit", limit.to_string()),
                ],
            )
            .await
            .map_err(transport_error)?;

        Self::read_json(response).await
    }

    async fn get_business(&self, business_id: String) -> Result<YelpBusiness, CoreError> {
        let api_key = self.api_key()?;
        info!("Fetching details for business: {}", business_id);

        let url = self.endpoint(&["businesses", &business_id])?;
        let response = self.get(api_key, url, &[]).await.map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound(format!(
                "Business {} not found",
                business_id
            )));
        }

        let business: YelpBusiness = Self::read_json(response).await?;
        info!("Retrieved details for: {}", business.name);
        Ok(business)
    }

    async fn get_reviews(
        &self,
        business_id: String,
        limit: u32,
    ) -> Result<Vec<YelpReview>, CoreError> {
        let api_key = self.api_key()?;
        info!("Fetching reviews for business: {}", business_id);

        let url = self.endpoint(&["businesses", &business_id, "reviews"])?;
        let response = match self
            .get(api_key, url, &[("limit", limit.min(MAX_REVIEWS).to_string())])
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch reviews (non-critical): {}", e);
                return Ok(Vec::new());
            }
        };

        if response.status() == StatusCode::NOT_FOUND {
            warn!("Reviews not available for business {} (404)", business_id);
            return Ok(Vec::new());
        }

        let ReviewsResponse { reviews } = Self::read_json(response).await?;
        info!("Retrieved {} reviews", reviews.len());
        Ok(reviews)
    }
}
