use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "gemma3";

pub struct OllamaClient {
    pub base_url: String,
    pub model: String,
    pub client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url,
            model,
            // no client-side deadline; the backend owns the timeout
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<LlmResponse> {
        let url = format!("{}/api/chat", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "stream": false,
        });

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("ollama chat API error: {}", error_text);
        }

        let json: serde_json::Value = resp.json().await?;

        let text = json
            .pointer("/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("ollama response missing message content"))?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "ollama".to_string(),
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}
