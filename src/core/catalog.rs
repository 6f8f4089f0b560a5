use crate::core::{Activity, Catalog, CatalogStore};
use crate::utils::error::{Result, RosterError};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 以單一讀寫鎖保護整份名冊的記憶體存放
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    activities: RwLock<Catalog>,
}

impl InMemoryCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    // 每個變更都是單一 push/remove，鎖中毒時資料仍一致，直接取回
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.activities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_activities(&self) -> Catalog {
        self.read().clone()
    }

    fn get_activity(&self, name: &str) -> Result<Activity> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: name.to_string(),
            })
    }

    fn add_participant(&self, name: &str, participant: &str) -> Result<Activity> {
        let mut catalog = self.write();
        let activity = catalog
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        if activity.is_enrolled(participant) {
            return Err(RosterError::AlreadySignedUp {
                activity: name.to_string(),
                participant: participant.to_string(),
            });
        }

        activity.participants.push(participant.to_string());
        Ok(activity.clone())
    }

    fn remove_participant(&self, name: &str, participant: &str) -> Result<Activity> {
        let mut catalog = self.write();
        let activity = catalog
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == participant)
            .ok_or_else(|| RosterError::ParticipantNotFound {
                activity: name.to_string(),
                participant: participant.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(activity.clone())
    }
}
