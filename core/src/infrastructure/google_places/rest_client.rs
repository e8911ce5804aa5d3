use std::time::Duration;

use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{error, info, warn};
use url::Url;

use crate::domain::{
    common::{GooglePlacesConfig, entities::app_errors::CoreError},
    places::{
        entities::{GooglePlace, GooglePlaceDetails, PlaceSearchResult, STATUS_OK},
        ports::GooglePlacesClient,
    },
};

const API_KEY_VARIABLE: &str = "GOOGLE_PLACES_API_KEY";

const FIND_PLACE_FIELDS: &str = "place_id,name,formatted_address,rating,user_ratings_total,\
price_level,types,geometry,photos,business_status";

const DETAILS_FIELDS: &str = "place_id,name,rating,user_ratings_total,price_level,\
formatted_address,formatted_phone_number,opening_hours,website,photos,geometry,types,reviews";

const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const STATUS_NOT_FOUND: &str = "NOT_FOUND";

/// Client for the legacy Places endpoints, which accept a plain API key.
#[derive(Debug, Clone)]
pub struct GooglePlacesRestClient {
    api_key: Option<String>,
    api_base: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct FindPlaceResponse {
    #[serde(default)]
    candidates: Vec<GooglePlace>,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<GooglePlace>,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    result: Option<GooglePlaceDetails>,
    #[serde(default)]
    status: String,
}

impl GooglePlacesRestClient {
    pub fn new(config: GooglePlacesConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::ExternalServiceError(format!(
                    "Failed to build Google Places HTTP client: {}",
                    e
                ))
            })?;

        Ok(Self {
            api_key: config.api_key.filter(|key| !key.trim().is_empty()),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key
            .as_deref()
            .ok_or(CoreError::MissingConfiguration(API_KEY_VARIABLE))
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CoreError> {
        Url::parse_with_params(&format!("{}/place/{}", self.api_base, path), params).map_err(
            |e| CoreError::InvalidInput(format!("Invalid Google Places API base URL: {}", e)),
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CoreError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Google Places request failed: {}", e);
            CoreError::ExternalServiceError(format!("Google Places API error: {}", e))
        })?;

        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Google Places API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Google Places API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse Google Places response: {}", e);
            CoreError::ExternalServiceError(format!(
                "Failed to parse Google Places response: {}",
                e
            ))
        })
    }
}

impl GooglePlacesClient for GooglePlacesRestClient {
    async fn find_place_from_text(&self, query: String) -> Result<PlaceSearchResult, CoreError> {
        let api_key = self.api_key()?;
        info!("Trying exact match search for: {}", query);

        let url = self.endpoint(
            "findplacefromtext/json",
            &[
                ("input", query.as_str()),
                ("inputtype", "textquery"),
                ("fields", FIND_PLACE_FIELDS),
                ("key", api_key),
            ],
        )?;

        match self.get_json::<FindPlaceResponse>(url).await {
            Ok(FindPlaceResponse { candidates, status }) => Ok(PlaceSearchResult {
                results: candidates,
                status,
            }),
            Err(e) => {
                error!("Find place from text failed: {}", e);
                Ok(PlaceSearchResult::failed())
            }
        }
    }

    async fn text_search(
        &self,
        query: String,
        location: Option<String>,
        radius: u32,
    ) -> Result<PlaceSearchResult, CoreError> {
        let api_key = self.api_key()?;
        info!("Text search for: {}", query);

        let radius = radius.to_string();
        let mut params = vec![("query", query.as_str()), ("key", api_key)];
        if let Some(location) = location.as_deref() {
            params.push(("location", location));
            params.push(("radius", radius.as_str()));
        }

        let url = self.endpoint("textsearch/json", &params)?;
        let TextSearchResponse { results, status } = self.get_json(url).await?;

        if status != STATUS_OK && status != STATUS_ZERO_RESULTS {
            warn!("Google Places API status: {}", status);
        }
        info!("Found {} places", results.len());

        Ok(PlaceSearchResult { results, status })
    }

    async fn get_place_details(&self, place_id: String) -> Result<GooglePlaceDetails, CoreError> {
        let api_key = self.api_key()?;
        info!("Fetching details for place: {}", place_id);

        let url = self.endpoint(
            "details/json",
            &[
                ("place_id", place_id.as_str()),
                ("fields", DETAILS_FIELDS),
                ("key", api_key),
            ],
        )?;
        let DetailsResponse { result, status } = self.get_json(url).await?;

        match result {
            Some(place) if status == STATUS_OK => {
                info!("Retrieved details for: {}", place.name);
                Ok(place)
            }
            _ if status == STATUS_NOT_FOUND => {
                warn!("Google Places API status: {}", status);
                Err(CoreError::NotFound(format!("Place {} not found", place_id)))
            }
            _ => {
                warn!("Google Places API status: {}", status);
                Err(CoreError::ExternalServiceError(format!(
                    "Failed to get place details: {}",
                    status
                )))
            }
        }
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Result<String, CoreError> {
        let api_key = self.api_key()?;
        let max_width = max_width.to_string();

        let url = self.endpoint(
            "photo",
            &[
                ("maxwidth", max_width.as_str()),
                ("photoreference", photo_reference),
                ("key", api_key),
            ],
        )?;

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: Option<&str>) -> GooglePlacesRestClient {
        GooglePlacesRestClient::new(GooglePlacesConfig {
            api_key: api_key.map(str::to_string),
            api_base: "https://maps.googleapis.com/maps/api/".to_string(),
            request_timeout_secs: 10,
        })
        .unwrap()
    }

    #[test]
    fn test_photo_url() {
        let url = client(Some("secret")).photo_url("Aap_uE+ref", 800).unwrap();

        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=800&photoreference=Aap_uE%2Bref&key=secret"
        );
    }

    #[test]
    fn test_endpoint_encodes_query() {
        let url = client(Some("secret"))
            .endpoint(
                "textsearch/json",
                &[("query", "BCD Tofu House Los Angeles"), ("key", "secret")],
            )
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/place/textsearch/json?query=BCD+Tofu+House+Los+Angeles&key=secret"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_is_an_error() {
        let missing = CoreError::MissingConfiguration("GOOGLE_PLACES_API_KEY");
        let client = client(None);

        assert_eq!(client.photo_url("ref", 800), Err(missing.clone()));
        assert_eq!(
            client.find_place_from_text("Tartine".to_string()).await,
            Err(missing.clone())
        );
        assert_eq!(
            client.text_search("Tartine".to_string(), None, 50_000).await,
            Err(missing.clone())
        );
        assert_eq!(
            client.get_place_details("ChIJ".to_string()).await,
            Err(missing)
        );
    }

    #[test]
    fn test_details_response_without_result() {
        let response: DetailsResponse =
            serde_json::from_value(serde_json::json!({ "status": "INVALID_REQUEST" })).unwrap();

        assert!(response.result.is_none());
        assert_eq!(response.status, "INVALID_REQUEST");
    }
}
