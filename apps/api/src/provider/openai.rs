//! OpenAI chat-completions backend for [`TextGenerator`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Completion, PromptSpec, ProviderError, TextGenerator, TokenUsage};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Hard bound on any single provider call. The request future is also
/// dropped when the client disconnects, which aborts the outbound call.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The OpenAI-backed generator shared across all requests. Stateless from a
/// request's perspective; the inner reqwest client pools connections.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    /// Resolved once at startup. `None` makes every call fail with
    /// `MissingCredential` without touching the network.
    api_key: Option<String>,
}

impl OpenAiGenerator {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    /// Makes exactly one call to the chat-completions API. No retries: a
    /// failed or empty completion is surfaced immediately to the caller.
    async fn generate(&self, spec: &PromptSpec) -> Result<Completion, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        let request_body = ChatRequest {
            model: spec.model_id,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &spec.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &spec.user_prompt,
                },
            ],
            temperature: spec.temperature,
            max_tokens: spec.max_output_tokens,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("provider API returned {status}: {body}");
            // Surface the provider's own message where the body parses
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        let usage = chat.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        });

        let text = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
            .ok_or(ProviderError::EmptyCompletion)?;

        if let Some(u) = &usage {
            debug!(
                "provider call succeeded: input_tokens={}, output_tokens={}",
                u.input_tokens, u.output_tokens
            );
        }

        Ok(Completion { text, usage })
    }
}
