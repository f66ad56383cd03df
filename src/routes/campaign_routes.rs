use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::campaign_controller::CampaignController;
use crate::dto::admin_dto::ApiResponse;
use crate::dto::campaign_dto::{
    CampaignFilters, CampaignResponse, CreateCampaignRequest, UpdateCampaignRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_campaign_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_campaign))
        .route("/", get(list_campaigns))
        .route("/:id", get(get_campaign))
        .route("/:id", put(update_campaign))
        .route("/:id", delete(delete_campaign))
}

async fn create_campaign(
    State(state): State<AppState>,
    Json(request): Json<CreateCampaignRequest>,
) -> Result<Json<ApiResponse<CampaignResponse>>, AppError> {
    let controller = CampaignController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignResponse>, AppError> {
    let controller = CampaignController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_campaigns(
    State(state): State<AppState>,
    Query(filters): Query<CampaignFilters>,
) -> Result<Json<Vec<CampaignResponse>>, AppError> {
    let controller = CampaignController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCampaignRequest>,
) -> Result<Json<ApiResponse<CampaignResponse>>, AppError> {
    let controller = CampaignController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CampaignController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Campaña eliminada exitosamente"
    })))
}
