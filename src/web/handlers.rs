use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::core::roster::{Confirmation, RosterService};
use crate::core::{Catalog, CatalogStore};
use crate::web::error::ApiError;

/// `?email=` is required; a missing parameter is rejected by `Query` with 400.
#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn list_activities_handler<S: CatalogStore + 'static>(
    State(service): State<Arc<RosterService<S>>>,
) -> Json<Catalog> {
    Json(service.get_all_activities())
}

pub async fn signup_handler<S: CatalogStore + 'static>(
    State(service): State<Arc<RosterService<S>>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<Confirmation>, ApiError> {
    service
        .sign_up(&activity_name, &query.email)
        .map(Json)
        .map_err(ApiError::rejected_signup)
}

pub async fn unregister_handler<S: CatalogStore + 'static>(
    State(service): State<Arc<RosterService<S>>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<Confirmation>, ApiError> {
    service
        .unregister(&activity_name, &query.email)
        .map(Json)
        .map_err(ApiError::from)
}
