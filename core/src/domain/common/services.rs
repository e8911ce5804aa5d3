use crate::domain::{
    llm_output::ports::LLMClient, places::ports::GooglePlacesClient,
    restaurant::ports::YelpClient,
};

/// Service aggregating every outbound port; the domain services are implemented on it.
#[derive(Clone)]
pub struct Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) yelp_client: Y,
    pub(crate) places_client: GP,
}

impl<LLM, Y, GP> Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    pub fn new(llm_client: LLM, yelp_client: Y, places_client: GP) -> Self {
        Self {
            llm_client,
            yelp_client,
            places_client,
        }
    }
}
