use serde::{Deserialize, Serialize};
use validator::Validate;

/// Free-text chat request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Request to rewrite a venue blurb into a short "vibe" paragraph
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VibeRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    #[serde(default, alias = "shortDescription")]
    pub short_description: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub address: Option<String>,
}
