use crate::config::toml_config::TomlConfig;
use crate::config::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sentiment-api")]
#[command(about = "HTTP service that labels text as Positive, Negative or Neutral")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides the config file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Allowed CORS origin, repeatable; `*` allows any origin
    #[arg(long = "allow-origin")]
    pub allowed_origins: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Result of layering defaults, the optional config file and CLI flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub server: ServerConfig,
    pub verbose: bool,
    pub json_logs: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut server = file.to_server_config();
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if !self.allowed_origins.is_empty() {
            server.allowed_origins = self.allowed_origins.clone();
        }

        Ok(ResolvedConfig {
            server,
            verbose: self.verbose || file.verbose(),
            json_logs: self.json_logs || file.json_logs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["sentiment-api"]);
        let resolved = cli.resolve().unwrap();
        assert_eq!(resolved.server, ServerConfig::default());
        assert!(!resolved.verbose);
        assert!(!resolved.json_logs);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 8000\n\n[logging]\njson = true\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "sentiment-api",
            "--config",
            &path,
            "--port",
            "9000",
            "--allow-origin",
            "http://localhost:5173",
        ]);
        let resolved = cli.resolve().unwrap();

        assert_eq!(resolved.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(resolved.server.allowed_origins, vec!["http://localhost:5173"]);
        assert!(resolved.json_logs);
    }
}
