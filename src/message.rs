// src/message.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Accessibility context sent alongside every chat message.
///
/// Optional fields stay `None` when the client omits them or sends `null`;
/// an empty list is a different value and is rendered differently in the prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub mobility_level: Option<String>,
    #[serde(default)]
    pub conditions: Option<Vec<String>>,
    #[serde(default)]
    pub triggers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "message cannot be empty"))]
    pub message: String,
    pub profile: Profile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
