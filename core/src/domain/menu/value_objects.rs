pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct ParseMenuInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub target_language: Option<String>,
}
