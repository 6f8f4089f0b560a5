use crate::domain::model::{Activity, Catalog};
use crate::utils::error::Result;

/// 活動名冊的存放介面；所有變更都必須對同時呼叫者保持原子性
pub trait CatalogStore: Send + Sync {
    /// 整份名冊的快照，不會失敗也不會改變狀態
    fn list_activities(&self) -> Catalog;

    fn get_activity(&self, name: &str) -> Result<Activity>;

    /// 依報名順序附加參與者，回傳變更後的活動快照
    fn add_participant(&self, name: &str, participant: &str) -> Result<Activity>;

    fn remove_participant(&self, name: &str, participant: &str) -> Result<Activity>;
}
