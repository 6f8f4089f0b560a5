#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use seed::{default_catalog, ActivitySeed};
pub use toml_config::{ServerConfig, TomlConfig};
