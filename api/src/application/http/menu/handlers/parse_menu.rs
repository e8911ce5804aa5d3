use axum::extract::{Multipart, State};
use menulens_core::domain::menu::{
    entities::ParsedMenu,
    ports::MenuService,
    value_objects::{DEFAULT_IMAGE_MIME_TYPE, ParseMenuInput},
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, ToSchema)]
pub struct ParseMenuForm {
    /// Menu photo (JPEG, PNG, WebP, ...)
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Language to translate into, e.g. "English"; omit to skip translation
    pub target_language: Option<String>,
}

#[utoipa::path(
    post,
    path = "/parse",
    tag = "menu",
    summary = "Parse a menu photo",
    description = "Reads every dish from a menu photo into categories and items, optionally translated into target_language.",
    request_body(content = ParseMenuForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ParsedMenu),
        (status = 400, body = ApiErrorResponse, description = "Missing image or unreadable model output"),
        (status = 500, body = ApiErrorResponse, description = "Model call failed or GEMINI_API_KEY not set")
    )
)]
pub async fn parse_menu(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ParsedMenu>, ApiError> {
    state.service.ensure_configured()?;

    let mut image: Option<(Vec<u8>, String)> = None;
    let mut target_language: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field
                    .content_type()
                    .filter(|content_type| content_type.starts_with("image/"))
                    .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
                    .to_string();
                let file_name = field.file_name().map(str::to_string);

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                tracing::info!(
                    "Received image: {:?}, size: {} bytes",
                    file_name,
                    data.len()
                );
                image = Some((data.to_vec(), mime_type));
            }
            "target_language" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read target_language: {}", e))
                })?;
                let value = value.trim();
                target_language = (!value.is_empty()).then(|| value.to_string());
            }
            _ => {}
        }
    }

    let (image_data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    if image_data.is_empty() {
        return Err(ApiError::BadRequest("Image is empty".to_string()));
    }

    let menu = state
        .service
        .parse_menu(ParseMenuInput {
            image_data,
            mime_type,
            target_language,
        })
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::BadRequest(message) => {
                ApiError::BadRequest(format!("Failed to parse menu: {}", message))
            }
            other => other,
        })?;

    Ok(Response::OK(menu))
}
