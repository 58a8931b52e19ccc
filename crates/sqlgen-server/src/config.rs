use sqlgen_core::providers::llm::ollama;
use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub model: String,
    pub backend_url: String,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            model: ollama::DEFAULT_MODEL.to_string(),
            backend_url: ollama::DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = env::var("SQLGEN_MODEL") {
            cfg.model = v;
        }
        if let Ok(v) = env::var("SQLGEN_BACKEND") {
            cfg.backend_url = v;
        }
        if let Ok(v) = env::var("SQLGEN_LOG") {
            cfg.log_level = v;
        }
        cfg
    }
}
