//! Provider capability interface — the single point of entry for all
//! generative-text calls in the roast service.
//!
//! ARCHITECTURAL RULE: no other module may talk to a provider API directly.
//! Handlers see only `Arc<dyn TextGenerator>`; the concrete backend is
//! chosen once at startup. This keeps the invoker swappable and the
//! handlers testable with a substitute provider.

use async_trait::async_trait;
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiGenerator;

/// A fully composed, immutable prompt pair plus the sampling parameters
/// the invocation must use. Built by the prompt composer, consumed by a
/// `TextGenerator`, never mutated in between.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model_id: &'static str,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Token accounting reported by the provider, when available.
#[derive(Debug, Clone, Copy)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// The result of exactly one provider invocation.
/// `text` is guaranteed non-empty; an empty completion is an error.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential configured. Checked before any network traffic.
    #[error("provider credential is not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The call succeeded but the completion carried no text.
    #[error("provider returned empty content")]
    EmptyCompletion,
}

/// The generative-text capability. One call in, one completion (or error)
/// out. Implementations must not retry internally: the service guarantees
/// exactly one provider invocation per request, and retry policy belongs
/// to callers that explicitly opt into it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, spec: &PromptSpec) -> Result<Completion, ProviderError>;
}
