//! Middleware de Rate Limiting
//!
//! Este módulo maneja la limitación de velocidad de requests
//! para prevenir abuso de la API.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;

/// Información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado global del rate limiting
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl RateLimitState {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests: config.rate_limit_requests,
            window_duration: Duration::from_secs(config.rate_limit_window),
        }
    }

    /// Verificar si una IP ha excedido el límite de la ventana actual
    pub async fn check_rate_limit(&self, ip: &str) -> bool {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if now.duration_since(info.window_start) >= self.window_duration {
            info.requests = 1;
            info.window_start = now;
            return true;
        }

        if info.requests >= self.max_requests {
            return false;
        }

        info.requests += 1;
        true
    }
}

/// Middleware de rate limiting
pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .split(',')
        .next()
        .unwrap_or("unknown")
        .trim()
        .to_string();

    if !rate_limit_state.check_rate_limit(&ip).await {
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max_requests: u32) -> RateLimitState {
        RateLimitState {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration: Duration::from_secs(60),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_allows_under_limit() {
        let state = state(3);
        assert!(state.check_rate_limit("10.0.0.1").await);
        assert!(state.check_rate_limit("10.0.0.1").await);
        assert!(state.check_rate_limit("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_rate_limit_blocks_over_limit() {
        let state = state(2);
        assert!(state.check_rate_limit("10.0.0.2").await);
        assert!(state.check_rate_limit("10.0.0.2").await);
        assert!(!state.check_rate_limit("10.0.0.2").await);
        // Otra IP no se ve afectada
        assert!(state.check_rate_limit("10.0.0.3").await);
    }
}
