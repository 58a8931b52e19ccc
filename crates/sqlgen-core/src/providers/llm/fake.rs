use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;

/// Deterministic in-process backend for tests and dev runs.
pub struct FakeClient {
    reply: String,
    fail_with: Option<String>,
}

impl FakeClient {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail_with: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(message.into()),
        }
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<LlmResponse> {
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{}", message);
        }
        Ok(LlmResponse {
            text: self.reply.clone(),
            provider: "fake".to_string(),
            model: "fake".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
