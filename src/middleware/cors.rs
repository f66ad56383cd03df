//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde la consola de administración.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::environment::EnvironmentConfig;

/// Crear middleware de CORS según el entorno
///
/// En desarrollo permite cualquier origen; en producción solo los
/// orígenes configurados en CORS_ORIGINS.
pub fn cors_middleware(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(&config.cors_origins)
    } else {
        CorsLayer::very_permissive()
    }
}

/// Crear middleware de CORS con orígenes específicos
fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("origin"),
        HeaderName::from_static("x-requested-with"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
