use nutrilens_core::domain::chat::entities::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SendMessageValidator {
    /// Previous turns of the conversation, oldest first.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[validate(length(min = 1, max = 2000, message = "message must be between 1 and 2000 characters"))]
    #[schema(example = "Is avocado good for a keto diet?")]
    pub message: String,
}
