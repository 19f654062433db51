//! HTTP handlers for catalog endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::application::handlers::{CreateLabCommand, CreateModuleCommand};
use crate::domain::foundation::{LabId, ModuleId};

use super::super::error::ApiError;
use super::super::middleware::{RequireAdmin, RequireAuth};
use super::super::state::ApiState;
use super::dto::{
    CreateLabRequest, CreateModuleRequest, CreatedResponse, LabView, ModuleView,
};

/// `GET /api/modules`
pub async fn list_modules(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<ModuleView>>, ApiError> {
    let views = state.list_modules_handler().handle(&user.user_id).await?;
    Ok(Json(views))
}

/// `GET /api/modules/:id`
pub async fn get_module(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<ModuleView>, ApiError> {
    let module_id = ModuleId::new(id).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let view = state
        .get_module_handler()
        .handle(&user.user_id, &module_id)
        .await?;
    Ok(Json(view))
}

/// `POST /api/modules` (admin)
pub async fn create_module(
    State(state): State<ApiState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<CreateModuleRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request("Malformed request body"))?;

    let id = state.create_module_handler().handle(CreateModuleCommand {
        title: request.title,
        description: request.description,
        duration: request.duration,
        difficulty: request.difficulty,
        category: request.category,
        content: request.content,
        video_url: request.video_url,
    })?;

    Ok(Json(CreatedResponse::new(id.as_str())))
}

/// `GET /api/labs`
pub async fn list_labs(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<Vec<LabView>>, ApiError> {
    let views = state.list_labs_handler().handle(&user.user_id).await?;
    Ok(Json(views))
}

/// `GET /api/labs/:id`
pub async fn get_lab(
    State(state): State<ApiState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<LabView>, ApiError> {
    let lab_id = LabId::new(id).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let view = state.get_lab_handler().handle(&user.user_id, &lab_id).await?;
    Ok(Json(view))
}

/// `POST /api/labs` (admin)
pub async fn create_lab(
    State(state): State<ApiState>,
    RequireAdmin(_admin): RequireAdmin,
    payload: Result<Json<CreateLabRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request("Malformed request body"))?;

    let id = state.create_lab_handler().handle(CreateLabCommand {
        title: request.title,
        description: request.description,
        estimated_time: request.estimated_time,
        difficulty: request.difficulty,
        category: request.category,
        objectives: request.objectives,
        simulation_url: request.simulation_url,
    })?;

    Ok(Json(CreatedResponse::new(id.as_str())))
}
