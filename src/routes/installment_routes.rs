use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::installment_controller::InstallmentController;
use crate::dto::admin_dto::ApiResponse;
use crate::dto::installment_dto::InstallmentResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_installment_router() -> Router<AppState> {
    Router::new().route("/:id/pay", post(pay_installment))
}

async fn pay_installment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<InstallmentResponse>>, AppError> {
    let controller = InstallmentController::new(state.pool.clone());
    let response = controller.pay(id).await?;
    Ok(Json(response))
}
