mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rental Admin - Administración de Alquiler de Vehículos");
    info!("=========================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let env_config = EnvironmentConfig::default();
    let app_state = AppState::new(pool, env_config.clone());
    let rate_limit_state = RateLimitState::new(&env_config);

    // Rutas protegidas por JWT
    let protected = Router::new()
        .route("/api/auth/me", get(routes::auth_routes::me))
        .nest("/api/customer", routes::customer_routes::create_customer_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/driver", routes::driver_routes::create_driver_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/campaign", routes::campaign_routes::create_campaign_router())
        .nest("/api/promotion", routes::promotion_routes::create_promotion_router())
        .nest("/api/installment", routes::installment_routes::create_installment_router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::auth_middleware,
        ));

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(axum::middleware::from_fn_with_state(
            rate_limit_state,
            rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&env_config))
        .with_state(app_state);

    // Puerto del servidor
    let addr: SocketAddr = format!("0.0.0.0:{}", env_config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔑 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar administrador");
    info!("   POST /api/auth/login - Login administrador");
    info!("   GET  /api/auth/me - Obtener administrador actual");
    info!("👤 Endpoints - Customer:");
    info!("   POST /api/customer - Crear cliente");
    info!("   GET  /api/customer - Listar clientes");
    info!("   GET  /api/customer/:id - Obtener cliente");
    info!("   PUT  /api/customer/:id - Actualizar cliente");
    info!("   DELETE /api/customer/:id - Eliminar cliente");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("   POST /api/vehicle/:id/status - Actualizar estado");
    info!("🧑 Endpoints - Driver:");
    info!("   POST /api/driver - Crear conductor");
    info!("   GET  /api/driver - Listar conductores");
    info!("   GET  /api/driver/:id - Obtener conductor");
    info!("   PUT  /api/driver/:id - Actualizar conductor");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("   POST /api/driver/:id/status - Actualizar estado");
    info!("📅 Endpoints - Booking:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking - Listar reservas");
    info!("   POST /api/booking/availability - Chequear disponibilidad");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   PUT  /api/booking/:id - Actualizar reserva");
    info!("   DELETE /api/booking/:id - Eliminar reserva");
    info!("   POST /api/booking/:id/status - Transicionar estado");
    info!("   GET  /api/booking/:id/installments - Listar cuotas");
    info!("   POST /api/booking/:id/installments - Generar plan de cuotas");
    info!("   DELETE /api/booking/:id/installments - Eliminar plan de cuotas");
    info!("🗺  Endpoints - Campaign:");
    info!("   POST /api/campaign - Crear campaña de tour");
    info!("   GET  /api/campaign - Listar campañas");
    info!("   GET  /api/campaign/:id - Obtener campaña");
    info!("   PUT  /api/campaign/:id - Actualizar campaña");
    info!("   DELETE /api/campaign/:id - Eliminar campaña");
    info!("🏷  Endpoints - Promotion:");
    info!("   POST /api/promotion - Crear promoción");
    info!("   GET  /api/promotion - Listar promociones");
    info!("   GET  /api/promotion/:id - Obtener promoción");
    info!("   PUT  /api/promotion/:id - Actualizar promoción");
    info!("   DELETE /api/promotion/:id - Eliminar promoción");
    info!("💳 Endpoints - Installment:");
    info!("   POST /api/installment/:id/pay - Pagar cuota");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de administración de alquiler funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
