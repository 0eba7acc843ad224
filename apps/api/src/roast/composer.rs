//! Prompt Composer — turns a validated email into a versioned [`PromptSpec`].
//!
//! Pure and deterministic: no I/O, no randomness. Composing twice from the
//! same `(email, version)` yields byte-identical prompts. Each version is a
//! self-contained policy record (persona, structure template, sampling
//! defaults, model id); adding or retiring a version never touches the
//! validator, the invoker, or the route contract.

use crate::provider::PromptSpec;
use crate::roast::prompts;

/// Slot in every user-prompt template where the caller's email lands.
const EMAIL_SLOT: &str = "{email}";

/// Named, immutable prompt policy bundles. Earlier versions are superseded
/// configurations kept selectable, not parallel features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVersion {
    /// v1: roast / rewrite / explanation, as originally shipped.
    BrutalConstructive,
    /// v2: fixed scorecard rubric ahead of the roast. Canonical.
    ScoredRubric,
}

impl PromptVersion {
    /// The version new requests are served with.
    pub fn latest() -> Self {
        PromptVersion::ScoredRubric
    }

    pub fn name(&self) -> &'static str {
        match self {
            PromptVersion::BrutalConstructive => "brutal-constructive-v1",
            PromptVersion::ScoredRubric => "scored-rubric-v2",
        }
    }

    fn system_prompt(&self) -> &'static str {
        match self {
            PromptVersion::BrutalConstructive => prompts::BRUTAL_CONSTRUCTIVE_SYSTEM,
            PromptVersion::ScoredRubric => prompts::SCORED_RUBRIC_SYSTEM,
        }
    }

    fn user_template(&self) -> &'static str {
        match self {
            PromptVersion::BrutalConstructive => prompts::BRUTAL_CONSTRUCTIVE_TEMPLATE,
            PromptVersion::ScoredRubric => prompts::SCORED_RUBRIC_TEMPLATE,
        }
    }

    fn model_id(&self) -> &'static str {
        match self {
            PromptVersion::BrutalConstructive => "gpt-4o",
            PromptVersion::ScoredRubric => "gpt-4o",
        }
    }

    fn temperature(&self) -> f32 {
        match self {
            PromptVersion::BrutalConstructive => 0.8,
            PromptVersion::ScoredRubric => 0.8,
        }
    }

    fn max_output_tokens(&self) -> u32 {
        match self {
            PromptVersion::BrutalConstructive => 2000,
            // Scorecard adds a section, so a bigger output budget.
            PromptVersion::ScoredRubric => 2500,
        }
    }
}

/// Builds the immutable prompt pair for one request.
///
/// The email is inserted verbatim into the template's single `{email}` slot,
/// between the `---` delimiter lines. Delimiter-like sequences inside the
/// email are NOT escaped; an email containing the markers can confuse the
/// model about prompt boundaries. Known limitation, left as-is.
pub fn compose(email: &str, version: PromptVersion) -> PromptSpec {
    PromptSpec {
        system_prompt: version.system_prompt().to_string(),
        user_prompt: version.user_template().replacen(EMAIL_SLOT, email, 1),
        model_id: version.model_id(),
        temperature: version.temperature(),
        max_output_tokens: version.max_output_tokens(),
    }
}
