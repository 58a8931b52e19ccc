use crate::error::ApiError;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlgen_core::model::{GenerateRequest, GenerateResponse};
use sqlgen_core::prompt::build_prompt;
use sqlgen_core::providers::llm::LlmClient;
use sqlgen_core::sanitize::sanitize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Per-process state. Stateless across requests: only the backend handle
/// lives here.
pub struct AppState {
    pub client: Arc<dyn LlmClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-sql", post(generate_sql))
        .route("/health", get(health))
        .with_state(state)
}

async fn generate_sql(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    tracing::debug!(
        event = "generate_sql",
        provider = state.client.provider_name(),
        schema_bytes = req.schema.len(),
        question_bytes = req.question.len(),
    );

    let prompt = build_prompt(&req.schema, &req.question);
    let resp = state.client.complete(&prompt).await?;
    let sql_query = sanitize(&resp.text);

    Ok(Json(GenerateResponse { sql_query }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn run(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(event = "server_listening", addr = %listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
