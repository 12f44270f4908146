use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::{
        entities::{ChatRequest, ChatRole},
        ports::ChatClient,
    },
    common::{ChatConfig, VisionConfig, entities::app_errors::CoreError},
    food_detection::{
        entities::{DetectionError, ParseError},
        ports::VisionClient,
    },
};

/// How the credential is attached to each request.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Azure style `api-key` header.
    ApiKey(String),
    Bearer(String),
}

/// Client for an OpenAI/Azure compatible chat-completions deployment.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    endpoint: String,
    credential: Credential,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: ChatRole,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

#[derive(Debug)]
enum SendError {
    Timeout,
    Request(String),
    Status { status: u16, body: String },
    Decode(String),
}

impl From<SendError> for DetectionError {
    fn from(e: SendError) -> Self {
        match e {
            SendError::Timeout => DetectionError::Timeout,
            SendError::Request(msg) => DetectionError::Request(msg),
            SendError::Status { status, body } => DetectionError::Status { status, body },
            SendError::Decode(msg) => DetectionError::Parse(ParseError::InvalidJson(msg)),
        }
    }
}

impl From<SendError> for CoreError {
    fn from(e: SendError) -> Self {
        match e {
            SendError::Timeout => CoreError::ExternalServiceError("LLM API timed out".to_string()),
            SendError::Request(msg) => CoreError::ExternalServiceError(format!("LLM API error: {msg}")),
            SendError::Status { status, body } => CoreError::ExternalServiceError(format!(
                "LLM API returned error: {status} - {body}"
            )),
            SendError::Decode(msg) => {
                CoreError::ExternalServiceError(format!("Failed to parse LLM response: {msg}"))
            }
        }
    }
}

impl OpenAiCompatibleClient {
    pub fn new(
        endpoint: String,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            CoreError::InternalServerError
        })?;

        Ok(Self {
            endpoint,
            credential,
            client,
        })
    }

    pub fn for_vision(config: &VisionConfig) -> Result<Self, CoreError> {
        Self::new(
            config.endpoint.clone(),
            Credential::ApiKey(config.api_key.clone()),
            config.timeout,
        )
    }

    pub fn for_chat(config: &ChatConfig) -> Result<Self, CoreError> {
        Self::new(
            config.endpoint.clone(),
            Credential::Bearer(config.api_key.clone()),
            config.timeout,
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::ApiKey(key) => request.header("api-key", key),
            Credential::Bearer(token) => request.bearer_auth(token),
        }
    }

    async fn send(&self, body: &CompletionRequest) -> Result<CompletionResponse, SendError> {
        let response = self
            .authorize(self.client.post(&self.endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "LLM API request failed");
                if e.is_timeout() {
                    SendError::Timeout
                } else {
                    SendError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "LLM API returned error");
            return Err(SendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse LLM response");
            if e.is_timeout() {
                SendError::Timeout
            } else {
                SendError::Decode(e.to_string())
            }
        })
    }
}

impl VisionClient for OpenAiCompatibleClient {
    async fn complete_with_image(
        &self,
        system_prompt: String,
        image_data_url: String,
    ) -> Result<String, DetectionError> {
        let request = CompletionRequest {
            messages: vec![
                WireMessage {
                    role: ChatRole::System,
                    content: MessageContent::Parts(vec![ContentPart::Text {
                        text: system_prompt,
                    }]),
                },
                WireMessage {
                    role: ChatRole::User,
                    content: MessageContent::Parts(vec![ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_url,
                        },
                    }]),
                },
            ],
            temperature: Some(0.2),
            top_p: Some(0.95),
            max_tokens: 1000,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };

        self.send(&request)
            .await?
            .first_content()
            .ok_or(DetectionError::Parse(ParseError::MissingChoice))
    }
}

impl ChatClient for OpenAiCompatibleClient {
    async fn complete(&self, request: ChatRequest) -> Result<Option<String>, CoreError> {
        let body = CompletionRequest {
            messages: request
                .messages
                .into_iter()
                .map(|m| WireMessage {
                    role: m.role,
                    content: MessageContent::Text(m.content),
                })
                .collect(),
            temperature: Some(request.temperature),
            top_p: None,
            max_tokens: request.max_tokens,
            response_format: None,
        };

        Ok(self.send(&body).await?.first_content())
    }
}
