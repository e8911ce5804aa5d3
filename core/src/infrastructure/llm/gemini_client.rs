use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm_output::ports::LLMClient,
};

const API_KEY_VARIABLE: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    api_base: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiRequest {
    fn new(parts: Vec<Part>, response_schema: Option<serde_json::Value>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: response_schema.map(|response_schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }
}

impl GeminiResponse {
    /// Text of the first candidate, with its text parts concatenated.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let texts: Vec<String> = content.parts.into_iter().filter_map(|p| p.text).collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::ExternalServiceError(format!("Failed to build LLM HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        self.ensure_configured()?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    fn ensure_configured(&self) -> Result<(), CoreError> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::MissingConfiguration(API_KEY_VARIABLE));
        }
        Ok(())
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest::new(
            vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type,
                        data: base64_image,
                    },
                },
            ],
            response_schema,
        );

        self.call_gemini_api(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest::new(vec![Part::Text { text: prompt }], response_schema);

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(api_key: &str) -> LLMConfig {
        LLMConfig {
            gemini_api_key: api_key.to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_api_base: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            request_timeout_secs: 60,
        }
    }

    #[test]
    fn test_request_omits_generation_config_without_schema() {
        let request = GeminiRequest::new(vec![Part::Text { text: "hi".to_string() }], None);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn test_request_with_image_and_schema() {
        let request = GeminiRequest::new(
            vec![
                Part::Text { text: "menu".to_string() },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/png".to_string(),
                        data: general_purpose::STANDARD.encode([1u8, 2, 3]),
                    },
                },
            ],
            Some(json!({ "type": "array" })),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(value["contents"][0]["parts"][1]["inline_data"]["data"], "AQID");
        assert_eq!(
            value["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert_eq!(value["generation_config"]["response_schema"]["type"], "array");
    }

    #[test]
    fn test_response_text_concatenates_first_candidate_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "[\"Ramen\"," }, { "text": " \"Sushi\"]" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.into_text().as_deref(), Some("[\"Ramen\", \"Sushi\"]"));
    }

    #[test]
    fn test_response_without_text_is_empty() {
        let blocked: GeminiResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert_eq!(blocked.into_text(), None);

        let no_parts: GeminiResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] }))
                .unwrap();
        assert_eq!(no_parts.into_text(), None);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let client = GeminiLLMClient::new(config("")).unwrap();

        assert_eq!(
            client.ensure_configured(),
            Err(CoreError::MissingConfiguration("GEMINI_API_KEY"))
        );
        assert_eq!(
            client.generate_with_text("hi".to_string(), None).await,
            Err(CoreError::MissingConfiguration("GEMINI_API_KEY"))
        );
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let client = GeminiLLMClient::new(config("key")).unwrap();
        assert_eq!(client.api_base, "https://generativelanguage.googleapis.com/v1beta");
        assert!(client.ensure_configured().is_ok());
    }
}
