use axum::{
    extract::State,
    routing::post,
    Extension, Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminResponse, ApiResponse, RegisterAdminRequest};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::auth::AuthenticatedAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de autenticación
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterAdminRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone(), &state.config);
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone(), &state.config);
    let response = controller.login(request).await?;
    Ok(Json(response))
}

/// Handler de /api/auth/me, registrado detrás del middleware de auth
pub async fn me(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<AdminResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone(), &state.config);
    let response = controller.me(admin.admin_id).await?;
    Ok(Json(response))
}
