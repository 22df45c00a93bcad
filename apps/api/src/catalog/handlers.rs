use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::JobRoleRecord;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RolesResponse {
    pub roles: Vec<JobRoleRecord>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let catalog = state.catalog.snapshot();
    Json(RolesResponse {
        roles: catalog.roles.clone(),
    })
}
