use crate::api::{ApiReply, SqlGenApi};
use crate::model::{SuiteConfig, TestCase, TestOutcome};
use std::sync::Arc;
use std::time::Instant;

/// Sequential batch runner. One case fully completes (success, failure, or
/// timeout) before the next begins; a failed case never aborts the suite.
pub struct SuiteRunner {
    pub api: Arc<dyn SqlGenApi>,
}

impl SuiteRunner {
    pub fn new(api: Arc<dyn SqlGenApi>) -> Self {
        Self { api }
    }

    pub async fn run_case(&self, schema: &str, tc: &TestCase) -> TestOutcome {
        let start = Instant::now();

        match self.api.generate(schema, &tc.question).await {
            Ok(ApiReply::Ok { sql_query }) => {
                let elapsed = start.elapsed().as_secs_f64();
                tracing::debug!(event = "case_pass", name = %tc.name, secs = elapsed);
                TestOutcome {
                    name: tc.name.clone(),
                    question: tc.question.clone(),
                    success: true,
                    generated_sql: Some(sql_query),
                    response_time: Some(elapsed),
                    error: None,
                }
            }
            Ok(ApiReply::HttpError { status, body }) => {
                let elapsed = start.elapsed().as_secs_f64();
                tracing::debug!(event = "case_http_error", name = %tc.name, status);
                TestOutcome {
                    name: tc.name.clone(),
                    question: tc.question.clone(),
                    success: false,
                    generated_sql: None,
                    response_time: Some(elapsed),
                    error: Some(format!("HTTP {}: {}", status, body)),
                }
            }
            Err(e) => {
                tracing::debug!(event = "case_transport_error", name = %tc.name, error = %e);
                TestOutcome {
                    name: tc.name.clone(),
                    question: tc.question.clone(),
                    success: false,
                    generated_sql: None,
                    response_time: None,
                    error: Some(format!("Request failed: {}", e)),
                }
            }
        }
    }

    /// Run every case in order and return outcomes in the same order.
    pub async fn run_suite(&self, suite: &SuiteConfig) -> Vec<TestOutcome> {
        let mut outcomes = Vec::with_capacity(suite.cases.len());
        for tc in &suite.cases {
            outcomes.push(self.run_case(&suite.schema, tc).await);
        }
        outcomes
    }
}
