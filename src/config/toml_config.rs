use crate::config::seed::{build_catalog, default_seeds, ActivitySeed};
use crate::core::Catalog;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// 未設定時使用內建的活動清單
    pub activities: Option<Vec<ActivitySeed>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ROSTER_PORT})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        Self::substitute_vars(content, |name| std::env::var(name).ok())
    }

    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn seeds(&self) -> Vec<ActivitySeed> {
        self.activities.clone().unwrap_or_else(default_seeds)
    }

    pub fn uses_builtin_seed(&self) -> bool {
        self.activities.is_none()
    }

    /// 依設定建立初始名冊
    pub fn build_catalog(&self) -> Result<Catalog> {
        build_catalog(&self.seeds())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;

        if let Some(static_dir) = &self.server.static_dir {
            validate_path("server.static_dir", static_dir)?;
        }

        build_catalog(&self.seeds()).map(|_| ())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
