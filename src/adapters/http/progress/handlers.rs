//! HTTP handlers for progress endpoints.
//!
//! Responses reuse the domain read models directly; no extra DTOs.

use axum::extract::{Path, State};
use axum::Json;

use crate::domain::catalog::{LabView, ModuleView};
use crate::domain::foundation::{LabId, ModuleId};
use crate::domain::user::ProgressSummary;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::ApiState;

/// `POST /api/modules/:id/complete`
pub async fn complete_module(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<ModuleView>, ApiError> {
    let module_id = ModuleId::new(id).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let view = state
        .mark_module_complete_handler()
        .handle(&user.user_id, &module_id)
        .await?;
    Ok(Json(view))
}

/// `POST /api/labs/:id/complete`
pub async fn complete_lab(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<LabView>, ApiError> {
    let lab_id = LabId::new(id).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let view = state
        .mark_lab_complete_handler()
        .handle(&user.user_id, &lab_id)
        .await?;
    Ok(Json(view))
}

/// `GET /api/progress`
pub async fn get_progress(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ProgressSummary>, ApiError> {
    let summary = state
        .progress_summary_handler()
        .handle(&user.user_id)
        .await?;
    Ok(Json(summary))
}
