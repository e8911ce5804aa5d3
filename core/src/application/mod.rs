use crate::{
    domain::common::{MenuLensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        google_places::GooglePlacesRestClient, llm::GeminiLLMClient, yelp::YelpRestClient,
    },
};

pub type MenuLensService = Service<GeminiLLMClient, YelpRestClient, GooglePlacesRestClient>;

/// Wires the outbound adapters into a [`MenuLensService`].
///
/// Missing API keys are not an error here: each operation reports
/// [`CoreError::MissingConfiguration`] when it needs a key that is not set.
pub fn create_service(config: MenuLensConfig) -> Result<MenuLensService, CoreError> {
    let llm_client = GeminiLLMClient::new(config.llm)?;
    let yelp_client = YelpRestClient::new(config.yelp)?;
    let places_client = GooglePlacesRestClient::new(config.google_places)?;

    Ok(Service::new(llm_client, yelp_client, places_client))
}
