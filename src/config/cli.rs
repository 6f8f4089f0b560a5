use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "activity-roster")]
#[command(about = "In-memory extracurricular activity roster service")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to bind (overrides [server].host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides [server].port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory served under /static (overrides [server].static_dir)
    #[arg(long)]
    pub static_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔 (若有)，套用命令列覆蓋值後驗證
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(static_dir) = &self.static_dir {
            config.server.static_dir = Some(static_dir.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "activity-roster",
            "--port",
            "9100",
            "--static-dir",
            "./static",
            "-v",
        ]);
        assert_eq!(cli.port, Some(9100));
        assert_eq!(cli.static_dir.as_deref(), Some("./static"));
        assert!(cli.verbose);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[server]
host = "0.0.0.0"
port = 9000
"#,
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_str().unwrap().to_string()),
            port: Some(9200),
            ..CliConfig::default()
        };

        let config = cli.resolve().unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let cli = CliConfig {
            config: Some("/definitely/not/here/roster.toml".to_string()),
            ..CliConfig::default()
        };
        let err = cli.resolve().unwrap_err();
        assert!(matches!(err, crate::utils::error::RosterError::IoError(_)));
    }
}
