use std::{collections::HashMap, fs};

use anyhow::Context;
use url::Url;

/// Endpoint addresses for the two submission flows. Nothing here is
/// hardcoded at call sites; the defaults only point at a local deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ingest_endpoint: String,
    pub ask_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ingest_endpoint: "http://127.0.0.1:8080/api/ingest".into(),
            ask_endpoint: "http://127.0.0.1:8080/api/ask".into(),
        }
    }
}

/// Layering: built-in defaults, then `client.toml` in the working directory,
/// then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("ingest_endpoint") {
                settings.ingest_endpoint = v.clone();
            }
            if let Some(v) = file_cfg.get("ask_endpoint") {
                settings.ask_endpoint = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("INGEST_ENDPOINT") {
        settings.ingest_endpoint = v;
    }
    if let Ok(v) = std::env::var("APP__INGEST_ENDPOINT") {
        settings.ingest_endpoint = v;
    }

    if let Ok(v) = std::env::var("ASK_ENDPOINT") {
        settings.ask_endpoint = v;
    }
    if let Ok(v) = std::env::var("APP__ASK_ENDPOINT") {
        settings.ask_endpoint = v;
    }

    settings
}

impl Settings {
    pub fn ingest_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.ingest_endpoint)
            .with_context(|| format!("invalid ingest endpoint '{}'", self.ingest_endpoint))
    }

    pub fn ask_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.ask_endpoint)
            .with_context(|| format!("invalid ask endpoint '{}'", self.ask_endpoint))
    }
}
