pub mod catalog;
pub mod roster;

pub use crate::domain::model::{Activity, Catalog};
pub use crate::domain::ports::CatalogStore;
pub use crate::utils::error::Result;
