use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM Client trait for calling AI models.
///
/// Implementations return the raw response text untouched; callers route it
/// through [`recover_json`](super::recover_json) before trusting it.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Fails with [`CoreError::MissingConfiguration`] when no API key is set,
    /// so callers can reject a request before fetching anything else.
    fn ensure_configured(&self) -> Result<(), CoreError>;

    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
