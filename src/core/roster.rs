use crate::core::{Catalog, CatalogStore};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::validate_participant_identifier;
use serde::Serialize;

/// 成功操作回傳給邊界層的確認訊息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

/// Boundary-facing roster operations on top of a [`CatalogStore`].
///
/// The service adds no domain rules of its own beyond input shape checks;
/// uniqueness is enforced by the store and capacity is advisory.
pub struct RosterService<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> RosterService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_all_activities(&self) -> Catalog {
        let catalog = self.store.list_activities();
        tracing::debug!("Listing {} activities", catalog.len());
        catalog
    }

    pub fn sign_up(&self, activity: &str, participant: &str) -> Result<Confirmation> {
        validate_participant_identifier(participant)?;

        let updated = self
            .store
            .add_participant(activity, participant)
            .inspect_err(|e| log_rejection("signup", e))?;

        tracing::info!(
            activity = %activity,
            participant = %participant,
            enrolled = updated.enrolled_count(),
            "✅ Participant signed up"
        );
        if updated.is_over_capacity() {
            tracing::warn!(
                activity = %activity,
                enrolled = updated.enrolled_count(),
                max_participants = updated.max_participants,
                "Activity is over capacity; signup accepted"
            );
        }

        Ok(Confirmation {
            message: format!("Signed up {} for {}", participant, activity),
        })
    }

    pub fn unregister(&self, activity: &str, participant: &str) -> Result<Confirmation> {
        let updated = self
            .store
            .remove_participant(activity, participant)
            .inspect_err(|e| log_rejection("unregister", e))?;

        tracing::info!(
            activity = %activity,
            participant = %participant,
            enrolled = updated.enrolled_count(),
            "Participant unregistered"
        );

        Ok(Confirmation {
            message: format!("Unregistered {} from {}", participant, activity),
        })
    }
}

fn log_rejection(operation: &str, error: &RosterError) {
    if error.is_client_error() {
        tracing::warn!(operation, category = ?error.category(), "Request rejected: {}", error);
    } else {
        tracing::error!(operation, "❌ Roster operation failed: {}", error);
    }
}
