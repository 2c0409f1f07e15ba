//! Prompt-to-graph generation capability
//!
//! A generator turns free text into a `{nodes, edges}` payload, typically by
//! calling an external text-generation service. The core only depends on
//! the [`GraphGenerator`] trait; which provider sits behind it is the
//! embedder's choice. Responses are validated in two steps: the text must
//! contain a JSON object of the right shape, and that payload must build.

use crate::graph::{Graph, GraphSpec, ValidationError};
use async_trait::async_trait;
use std::collections::HashMap;

/// Errors from graph generation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("generator not available: {0}")]
    Unavailable(String),

    #[error("generation failed: {0}")]
    ProviderFailed(String),

    #[error("response is not a graph payload: {0}")]
    InvalidResponse(String),

    #[error("generated graph is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// Capability trait for prompt-to-graph generators
///
/// Abstracts over the provider (HTTP API, local model, mock) so callers
/// don't depend on how the graph is produced.
#[async_trait]
pub trait GraphGenerator: Send + Sync {
    /// Produce a graph payload for a prompt
    async fn generate(&self, prompt: &str) -> Result<GraphSpec, GenerationError>;
}

/// Generate and validate a graph in one step
pub async fn generate_graph(
    generator: &dyn GraphGenerator,
    prompt: &str,
) -> Result<(GraphSpec, Graph), GenerationError> {
    let spec = generator.generate(prompt).await?;
    let graph = Graph::from_spec(&spec)?;
    Ok((spec, graph))
}

/// Parse a provider's raw text response into a graph payload.
///
/// Text models often wrap JSON in markdown fences or add commentary.
/// Tries, in order:
/// 1. Direct parse (response is pure JSON)
/// 2. A ```json ... ``` or ``` ... ``` fenced block
/// 3. The span from the first `{` to the last `}`
pub fn parse_generated_graph(text: &str) -> Result<GraphSpec, GenerationError> {
    let value = extract_json(text)
        .ok_or_else(|| GenerationError::InvalidResponse("no JSON object found".into()))?;

    if !value.get("nodes").map(|v| v.is_array()).unwrap_or(false) {
        return Err(GenerationError::InvalidResponse(
            "missing \"nodes\" array".into(),
        ));
    }

    serde_json::from_value(value).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
}

fn extract_json(text: &str) -> Option<serde_json::Value> {
    let trimmed = text.trim();

    let parse_object = |s: &str| {
        serde_json::from_str::<serde_json::Value>(s.trim())
            .ok()
            .filter(|v| v.is_object())
    };

    if let Some(v) = parse_object(trimmed) {
        return Some(v);
    }

    let fenced = if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        after.find("```").map(|end| &after[..end])
    } else if let Some(start) = trimmed.find("```\n") {
        let after = &trimmed[start + 4..];
        after.find("```").map(|end| &after[..end])
    } else {
        None
    };
    if let Some(v) = fenced.and_then(parse_object) {
        return Some(v);
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => parse_object(&trimmed[start..=end]),
        _ => None,
    }
}

/// Mock generator for testing. Returns preconfigured responses.
pub struct MockGenerator {
    available: bool,
    responses: HashMap<String, String>,
    fallback: Option<String>,
}

impl MockGenerator {
    /// Create a mock generator that reports as available.
    pub fn available() -> Self {
        Self {
            available: true,
            responses: HashMap::new(),
            fallback: None,
        }
    }

    /// Create a mock generator whose every call fails as unavailable.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            responses: HashMap::new(),
            fallback: None,
        }
    }

    /// Register raw response text for an exact prompt.
    pub fn with_response(mut self, prompt: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(prompt.into(), text.into());
        self
    }

    /// Response text used for prompts without a registered response.
    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(text.into());
        self
    }
}

#[async_trait]
impl GraphGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<GraphSpec, GenerationError> {
        if !self.available {
            return Err(GenerationError::Unavailable("mock generator offline".into()));
        }
        let text = self
            .responses
            .get(prompt)
            .or(self.fallback.as_ref())
            .ok_or_else(|| GenerationError::ProviderFailed(format!("no response for '{}'", prompt)))?;
        parse_generated_graph(text)
    }
}
