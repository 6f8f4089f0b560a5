pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{default_catalog, ActivitySeed, TomlConfig};
pub use crate::core::{catalog::InMemoryCatalog, roster::Confirmation, roster::RosterService};
pub use crate::domain::model::{Activity, Catalog};
pub use crate::domain::ports::CatalogStore;
pub use crate::utils::error::{Result, RosterError};
