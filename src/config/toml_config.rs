use crate::config::ServerConfig;
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub cors: CorsSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub scorer: ScorerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_body_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsSection {
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerSection {
    #[serde(default)]
    pub extra_words: BTreeMap<String, f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ServiceError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PORT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file's values over `base`.
    pub fn apply_to(&self, base: ServerConfig) -> ServerConfig {
        let mut config = base;

        if let Some(host) = &self.server.host {
            config.host = host.clone();
        }
        if let Some(port) = self.server.port {
            config.port = port;
        }
        if let Some(max_body_bytes) = self.server.max_body_bytes {
            config.max_body_bytes = max_body_bytes;
        }
        if let Some(origins) = &self.cors.allowed_origins {
            config.allowed_origins = origins.clone();
        }
        config.extra_words.extend(
            self.scorer
                .extra_words
                .iter()
                .map(|(word, score)| (word.clone(), *score)),
        );

        config
    }

    pub fn to_server_config(&self) -> ServerConfig {
        self.apply_to(ServerConfig::default())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080
max_body_bytes = 4096

[cors]
allowed_origins = ["http://localhost:5173"]

[logging]
json = true

[scorer.extra_words]
meh = -0.2
rad = 0.8
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let server = config.to_server_config();

        assert_eq!(server.bind_address(), "0.0.0.0:8080");
        assert_eq!(server.max_body_bytes, 4096);
        assert_eq!(server.allowed_origins, vec!["http://localhost:5173"]);
        assert!(!server.allows_any_origin());
        assert_eq!(server.extra_words.get("rad"), Some(&0.8));
        assert!(config.json_logs());
        assert!(!config.verbose());
        assert!(server.validate().is_ok());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_server_config(), ServerConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SENTIMENT_API_TEST_PORT", "9123");

        let toml_content = r#"
[server]
port = ${SENTIMENT_API_TEST_PORT}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.port, Some(9123));

        std::env::remove_var("SENTIMENT_API_TEST_PORT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[server]
host = "${SENTIMENT_API_TEST_UNSET_HOST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.server.host.as_deref(),
            Some("${SENTIMENT_API_TEST_UNSET_HOST}")
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = TomlConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, ServiceError::TomlError(_)));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[server]
port = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.to_server_config().validate().is_err());
    }

    #[test]
    fn test_apply_keeps_base_values_not_in_file() {
        let base = ServerConfig {
            port: 7000,
            ..ServerConfig::default()
        };
        let config = TomlConfig::from_toml_str("[server]\nhost = \"0.0.0.0\"\n").unwrap();
        let merged = config.apply_to(base);
        assert_eq!(merged.bind_address(), "0.0.0.0:7000");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 5050\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.to_server_config().port, 5050);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ServiceError::ConfigError { .. }));
    }
}
