use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, truncate_chars},
    dishes::{
        aggregator::aggregate_dish_mentions,
        entities::PopularDish,
        matcher,
        ports::DishService,
        prompt::{build_dish_extraction_prompt, dish_list_schema},
    },
    llm_output::{JsonShape, ports::LLMClient, recover_json},
    places::ports::GooglePlacesClient,
    restaurant::ports::YelpClient,
};

const RAW_RESPONSE_LOG_CHARS: usize = 200;

impl<LLM, Y, GP> DishService for Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    #[instrument(skip(self, review_texts), fields(reviews = review_texts.len()))]
    async fn extract_popular_dishes(
        &self,
        review_texts: Vec<String>,
        top_n: usize,
    ) -> Vec<PopularDish> {
        if review_texts.is_empty() {
            return Vec::new();
        }

        match self.extract_dish_mentions(&review_texts).await {
            Ok(mentions) => {
                let dishes = aggregate_dish_mentions(&mentions, top_n);
                info!(
                    mentions = mentions.len(),
                    dishes = dishes.len(),
                    "Extracted popular dishes"
                );
                dishes
            }
            Err(e) => {
                error!("Failed to extract dishes: {}", e);
                Vec::new()
            }
        }
    }

    fn match_dish_to_menu(
        &self,
        dish_name: &str,
        menu_item_names: &[String],
        threshold: f64,
    ) -> Option<String> {
        matcher::match_dish_to_menu(dish_name, menu_item_names, threshold).map(str::to_string)
    }
}

impl<LLM, Y, GP> Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    /// One model call covering every review, returning the flat list of
    /// dish mentions in whatever order the model produced them.
    async fn extract_dish_mentions(&self, review_texts: &[String]) -> Result<Vec<String>, CoreError> {
        let prompt = build_dish_extraction_prompt(review_texts);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, Some(dish_list_schema()))
            .await?;

        debug!(
            "Gemini response: {}",
            truncate_chars(&raw_response, RAW_RESPONSE_LOG_CHARS)
        );

        let parsed = recover_json(&raw_response, JsonShape::Array)?;

        serde_json::from_value::<Vec<String>>(parsed).map_err(|e| {
            CoreError::UpstreamSchemaViolation(format!("dish list must be an array of strings: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        dishes::entities::DEFAULT_MATCH_THRESHOLD, llm_output::ports::MockLLMClient,
        places::ports::MockGooglePlacesClient, restaurant::ports::MockYelpClient,
    };

    fn service(llm: MockLLMClient) -> Service<MockLLMClient, MockYelpClient, MockGooglePlacesClient> {
        Service::new(llm, MockYelpClient::new(), MockGooglePlacesClient::new())
    }

    fn reviews() -> Vec<String> {
        vec![
            "The ramen was rich and the sushi fresh.".to_string(),
            "Ramen again, plus tempura.".to_string(),
        ]
    }

    #[tokio::test]
    async fn test_empty_reviews_skip_model_call() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let dishes = service(llm).extract_popular_dishes(Vec::new(), 10).await;

        assert!(dishes.is_empty());
    }

    #[tokio::test]
    async fn test_extract_ranks_mentions() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("Review 1: The ramen was rich")
                    && prompt.contains("Review 2: Ramen again")
                    && schema.is_some()
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok("```json\n[\"Ramen\", \"Sushi\", \"Ramen\", \"Tempura\", \"Ramen\", \"Sushi\",]\n```".to_string())
                })
            });

        let dishes = service(llm).extract_popular_dishes(reviews(), 2).await;

        assert_eq!(
            dishes,
            vec![
                PopularDish::new("Ramen".to_string(), 3),
                PopularDish::new("Sushi".to_string(), 2),
            ]
        );
    }

    #[tokio::test]
    async fn test_unparseable_output_yields_empty_list() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Ok("I could not find any dishes.".to_string()) })
        });

        let dishes = service(llm).extract_popular_dishes(reviews(), 10).await;

        assert!(dishes.is_empty());
    }

    #[tokio::test]
    async fn test_non_string_elements_yield_empty_list() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Ok(r#"["Ramen", {"name": "Sushi"}]"#.to_string()) })
        });

        let dishes = service(llm).extract_popular_dishes(reviews(), 10).await;

        assert!(dishes.is_empty());
    }

    #[tokio::test]
    async fn test_call_failure_yields_empty_list() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError("LLM API error: timeout".to_string()))
            })
        });

        let dishes = service(llm).extract_popular_dishes(reviews(), 10).await;

        assert!(dishes.is_empty());
    }

    #[test]
    fn test_match_dish_to_menu_returns_owned_name() {
        let menu = vec!["Tonkatsu Curry".to_string(), "Ramen".to_string()];
        let service = service(MockLLMClient::new());

        assert_eq!(
            service.match_dish_to_menu("tonkatsu", &menu, DEFAULT_MATCH_THRESHOLD),
            Some("Tonkatsu Curry".to_string())
        );
        assert_eq!(service.match_dish_to_menu("xyz123", &["Ramen".to_string()], 0.7), None);
    }
}
