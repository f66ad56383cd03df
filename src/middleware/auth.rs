//! Middleware de autenticación JWT
//!
//! Este módulo maneja la autenticación JWT, extracción de tokens
//! y verificación de administradores autenticados.

use axum::{extract::Request, extract::State, http::header, middleware::Next, response::Response};
use uuid::Uuid;

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{verify_token, JwtConfig},
};

/// Administrador autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub email: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT
    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(auth_header, &jwt_config)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de administrador inválido".to_string()))?;

    // Inyectar administrador autenticado en las extensions
    let authenticated_admin = AuthenticatedAdmin {
        admin_id,
        email: claims.email,
    };
    request.extensions_mut().insert(authenticated_admin);

    Ok(next.run(request).await)
}
