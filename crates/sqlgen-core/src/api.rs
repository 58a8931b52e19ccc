use crate::model::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of one generation request that reached the service.
///
/// Transport-level failures (connection refused, timeout) are the `Err`
/// arm of the calls below, not a variant here.
#[derive(Debug, Clone)]
pub enum ApiReply {
    Ok { sql_query: String },
    HttpError { status: u16, body: String },
}

#[async_trait]
pub trait SqlGenApi: Send + Sync {
    /// Reachability check. `Err` means the service cannot be reached at
    /// all; `Ok` carries whatever status the probe target returned.
    async fn probe(&self) -> anyhow::Result<u16>;

    async fn generate(&self, schema: &str, question: &str) -> anyhow::Result<ApiReply>;
}

pub struct HttpApi {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SqlGenApi for HttpApi {
    async fn probe(&self) -> anyhow::Result<u16> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }

    async fn generate(&self, schema: &str, question: &str) -> anyhow::Result<ApiReply> {
        let url = format!("{}/generate-sql", self.base_url);
        let req = GenerateRequest {
            schema: schema.to_string(),
            question: question.to_string(),
        };

        let resp = self
            .client
            .post(&url)
            .json(&req)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            let body: GenerateResponse = resp.json().await?;
            Ok(ApiReply::Ok {
                sql_query: body.sql_query,
            })
        } else {
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiReply::HttpError {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let api = HttpApi::new("http://localhost:8000/", Duration::from_secs(30));
        assert_eq!(api.base_url(), "http://localhost:8000");
    }
}
