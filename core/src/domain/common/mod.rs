pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MenuLensConfig {
    pub llm: LLMConfig,
    pub yelp: YelpConfig,
    pub google_places: GooglePlacesConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct YelpConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct GooglePlacesConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

/// Returns at most `max_chars` characters of `text`, never splitting a UTF-8 sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
