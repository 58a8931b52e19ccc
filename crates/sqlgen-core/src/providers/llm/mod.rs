use crate::model::LlmResponse;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<LlmResponse>;
    fn provider_name(&self) -> &'static str;
}

pub mod fake;
pub mod ollama;
