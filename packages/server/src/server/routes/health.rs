use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    entities: EntityCounts,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    users: usize,
    profiles: usize,
    posts: usize,
    member_types: usize,
}

/// Health check endpoint
///
/// The store is in process, so a response means it is reachable; the counts
/// are read under one guard.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    let tables = state.store.read().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        entities: EntityCounts {
            users: tables.users.len(),
            profiles: tables.profiles.len(),
            posts: tables.posts.len(),
            member_types: tables.member_types.len(),
        },
    })
}
