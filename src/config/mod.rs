#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::lexicon::is_single_token;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_origin, validate_positive_number,
    validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const MAX_BODY_BYTES_LIMIT: usize = 16 * 1024 * 1024;

/// Everything the HTTP listener needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
    /// Lexicon entries merged over the built-in word list.
    pub extra_words: BTreeMap<String, f64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec!["*".to_string()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            extra_words: BTreeMap::new(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_positive_number("server.port", self.port as usize, 1)?;
        validate_range(
            "server.max_body_bytes",
            self.max_body_bytes,
            1,
            MAX_BODY_BYTES_LIMIT,
        )?;

        validate_non_empty_list("cors.allowed_origins", &self.allowed_origins)?;
        for origin in &self.allowed_origins {
            validate_origin("cors.allowed_origins", origin)?;
        }

        for (word, score) in &self.extra_words {
            if !is_single_token(word) {
                return Err(ServiceError::InvalidConfigValueError {
                    field: "scorer.extra_words".to_string(),
                    value: word.clone(),
                    reason: "Word must be a single token of letters, digits or apostrophes"
                        .to_string(),
                });
            }
            validate_range(&format!("scorer.extra_words.{}", word), *score, -1.0, 1.0)?;
        }

        tracing::debug!("Server configuration validation passed");
        Ok(())
    }
}
