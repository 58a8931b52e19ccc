use serde::{Deserialize, Serialize};

/// Body of `POST /generate-sql`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub schema: String,
    pub question: String,
}

/// 200 body of `POST /generate-sql`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub sql_query: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub question: String,
}

/// A named set of test questions sharing one schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: String,
    pub schema: String,
    pub cases: Vec<TestCase>,
}

/// Recorded result of one test case execution.
///
/// Absent fields are omitted from the serialized report: a transport
/// failure has no response time, a success has no error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub question: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_sql: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
