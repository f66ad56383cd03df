use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::controllers::installment_controller::InstallmentController;
use crate::dto::admin_dto::ApiResponse;
use crate::dto::booking_dto::{
    AvailabilityRequest, AvailabilityResponse, BookingFilters, BookingResponse,
    CreateBookingRequest, UpdateBookingRequest, UpdateBookingStatusRequest,
};
use crate::dto::installment_dto::{GenerateInstallmentsRequest, InstallmentResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/availability", post(check_availability))
        .route("/:id", get(get_booking))
        .route("/:id", put(update_booking))
        .route("/:id", delete(delete_booking))
        .route("/:id/status", post(update_booking_status))
        .route("/:id/installments", get(list_installments))
        .route("/:id/installments", post(generate_installments))
        .route("/:id/installments", delete(delete_installments))
}

/// Chequeo de disponibilidad de vehículos y conductores
///
/// El formulario de reservas lo reinvoca en cada edición del rango de
/// fechas; en el flujo de edición manda `exclude_booking_id` para que
/// la reserva no entre en conflicto consigo misma.
async fn check_availability(
    State(state): State<AppState>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.check_availability(request).await?;
    Ok(Json(response))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(filters): Query<BookingFilters>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reserva eliminada exitosamente"
    })))
}

async fn list_installments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InstallmentResponse>>, AppError> {
    let controller = InstallmentController::new(state.pool.clone());
    let response = controller.list_by_booking(id).await?;
    Ok(Json(response))
}

async fn generate_installments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<GenerateInstallmentsRequest>,
) -> Result<Json<ApiResponse<Vec<InstallmentResponse>>>, AppError> {
    let controller = InstallmentController::new(state.pool.clone());
    let response = controller.generate_plan(id, request).await?;
    Ok(Json(response))
}

async fn delete_installments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = InstallmentController::new(state.pool.clone());
    let deleted = controller.delete_plan(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Plan de cuotas eliminado exitosamente",
        "deleted": deleted
    })))
}
