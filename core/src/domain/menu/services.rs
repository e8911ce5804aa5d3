use tracing::{debug, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, truncate_chars},
    llm_output::{JsonShape, ports::LLMClient, recover_json},
    menu::{
        assembler::assemble_menu,
        entities::ParsedMenu,
        ports::MenuService,
        prompt::build_menu_prompt,
        schema::menu_response_schema,
        value_objects::ParseMenuInput,
    },
    places::ports::GooglePlacesClient,
    restaurant::ports::YelpClient,
};

const RAW_RESPONSE_LOG_CHARS: usize = 1000;

impl<LLM, Y, GP> MenuService for Service<LLM, Y, GP>
where
    LLM: LLMClient,
    Y: YelpClient,
    GP: GooglePlacesClient,
{
    fn ensure_configured(&self) -> Result<(), CoreError> {
        self.llm_client.ensure_configured()
    }

    #[instrument(
        skip(self, input),
        fields(
            image_bytes = input.image_data.len(),
            target_language = ?input.target_language
        )
    )]
    async fn parse_menu(&self, input: ParseMenuInput) -> Result<ParsedMenu, CoreError> {
        let target_language = input.target_language.as_deref();

        // 1. Build the instruction and matching output schema
        let prompt = build_menu_prompt(target_language);
        let response_schema = menu_response_schema(target_language);

        // 2. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_image(
                prompt,
                input.image_data,
                input.mime_type,
                Some(response_schema),
            )
            .await?;

        debug!(
            "Gemini raw response (first {} chars): {}",
            RAW_RESPONSE_LOG_CHARS,
            truncate_chars(&raw_response, RAW_RESPONSE_LOG_CHARS)
        );

        // 3. Recover and validate
        let parsed = recover_json(&raw_response, JsonShape::Object).inspect_err(|e| {
            tracing::error!("Failed to parse menu: {}", e);
        })?;
        let menu = assemble_menu(parsed).inspect_err(|e| {
            tracing::error!("Invalid menu format: {}", e);
        })?;

        info!(
            categories = menu.menu.len(),
            items = menu.item_count(),
            detected_language = ?menu.detected_language.value(),
            "Successfully parsed menu"
        );

        Ok(menu)
    }
}
