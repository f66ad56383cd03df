use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::promotion_controller::PromotionController;
use crate::dto::admin_dto::ApiResponse;
use crate::dto::promotion_dto::{
    CreatePromotionRequest, PromotionFilters, PromotionResponse, UpdatePromotionRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_promotion_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_promotion))
        .route("/", get(list_promotions))
        .route("/:id", get(get_promotion))
        .route("/:id", put(update_promotion))
        .route("/:id", delete(delete_promotion))
}

async fn create_promotion(
    State(state): State<AppState>,
    Json(request): Json<CreatePromotionRequest>,
) -> Result<Json<ApiResponse<PromotionResponse>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_promotion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromotionResponse>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_promotions(
    State(state): State<AppState>,
    Query(filters): Query<PromotionFilters>,
) -> Result<Json<Vec<PromotionResponse>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_promotion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePromotionRequest>,
) -> Result<Json<ApiResponse<PromotionResponse>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_promotion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Promoción eliminada exitosamente"
    })))
}
