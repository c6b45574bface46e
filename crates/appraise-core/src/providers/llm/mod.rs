use crate::model::LlmResponse;
use async_trait::async_trait;

mod openai;
pub use openai::{OpenAIClient, DEFAULT_MODEL};

/// Narrow seam around the model provider: one completion per case, with
/// exactly two roles (system carries the rubric, user carries the code).
/// Tests substitute a deterministic implementation.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}
