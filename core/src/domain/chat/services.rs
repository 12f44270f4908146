use tracing::instrument;

use crate::domain::{
    chat::{
        entities::{ChatMessage, ChatRequest, ChatRole},
        ports::ChatClient,
    },
    common::entities::app_errors::CoreError,
};

pub const CHAT_SYSTEM_PROMPT: &str = "You are a nutrition expert AI assistant. You must ONLY answer questions related to:
- Food and nutrition
- Healthy eating
- Meal planning
- Dietary requirements
- Food science
- Weight management
- Recipe suggestions

Give short responses of 2 to 3 sentences and avoid unnecessary details. Do not provide any disclaimers or additional information outside of the nutrition domain.
For any other topics, respond with: \"I'm sorry, I can only answer questions about nutrition and healthy eating\".";

pub const FALLBACK_REPLY: &str = "I couldn't process that request.";
pub const CHAT_MAX_TOKENS: u32 = 150;
pub const CHAT_TEMPERATURE: f32 = 0.7;

pub struct ChatService<C> {
    client: C,
}

impl<C: ChatClient> ChatService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Callers cannot override the system prompt through the history.
    pub fn build_request(history: &[ChatMessage], message: &str) -> ChatRequest {
        let messages = std::iter::once(ChatMessage::new(ChatRole::System, CHAT_SYSTEM_PROMPT))
            .chain(
                history
                    .iter()
                    .filter(|m| m.role != ChatRole::System)
                    .cloned(),
            )
            .chain(std::iter::once(ChatMessage::new(ChatRole::User, message)))
            .collect();

        ChatRequest {
            messages,
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        }
    }

    /// Returns the history extended with the user message and the reply.
    #[instrument(skip(self, history, message), fields(history_len = history.len()))]
    pub async fn send(
        &self,
        mut history: Vec<ChatMessage>,
        message: &str,
    ) -> Result<Vec<ChatMessage>, CoreError> {
        if message.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let request = Self::build_request(&history, message);
        let reply = self
            .client
            .complete(request)
            .await?
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        history.retain(|m| m.role != ChatRole::System);
        history.push(ChatMessage::new(ChatRole::User, message));
        history.push(ChatMessage::new(ChatRole::Assistant, reply));
        Ok(history)
    }
}
