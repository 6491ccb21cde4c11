//! Conversational LLM backend - OpenAI-compatible chat completions
//!
//! Trait interface with a real blocking HTTP implementation and a fake
//! for tests. The router assembles the message list; this module only
//! moves it over the wire and extracts the generated reply.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Longer timeout than weather; generation is slow
pub const CHAT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Chat backend errors
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("AI service returned status {0}")]
    BadStatus(u16),

    #[error("invalid response payload: {0}")]
    InvalidPayload(String),

    #[error("AI service returned no reply")]
    EmptyResponse,
}

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One entry in the context sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat backend interface; swap in `FakeChatBackend` for tests
pub trait ChatBackend: Send + Sync {
    /// Send an ordered message list, get the generated reply text
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError>;
}

/// Chat client configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 150,
            temperature: 0.7,
            timeout_secs: CHAT_TIMEOUT_SECS,
        }
    }
}

/// Real chat client over blocking HTTP
pub struct OpenAiChatClient {
    config: ChatConfig,
    client: reqwest::blocking::Client,
}

impl OpenAiChatClient {
    pub fn new(config: ChatConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }
}

impl ChatBackend for OpenAiChatClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout(self.config.timeout_secs)
                } else {
                    ChatError::Http(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(ChatError::BadStatus(response.status().as_u16()));
        }

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| ChatError::InvalidPayload(format!("Failed to parse response: {}", e)))?;

        let text = payload
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .ok_or(ChatError::EmptyResponse)?;

        Ok(text.trim().to_string())
    }
}

/// Fake chat backend for tests: scripted replies, recorded message lists
pub struct FakeChatBackend {
    responses: Mutex<Vec<Result<String, ChatError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeChatBackend {
    /// Create a fake backend with pre-defined responses
    pub fn new(responses: Vec<Result<String, ChatError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fake that always replies with the same text
    pub fn always_reply(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Fake that always returns an error
    pub fn always_error(error: ChatError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of calls made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Every message list this backend was called with, in call order
    pub fn recorded_calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatBackend for FakeChatBackend {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        self.calls.lock().unwrap().push(messages.to_vec());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ChatError::EmptyResponse);
        }

        if responses.len() == 1 {
            // Keep returning the same response
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
