use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_availability_response_contract() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/booking/availability")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "pickup_date": "2025-06-05",
                        "pickup_time": "10:00",
                        "return_date": "2025-06-07",
                        "return_time": "10:00"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Sistema vacío: todo disponible, sin conflictos
    let body = read_json(response.into_body()).await;
    assert!(body["available_vehicles"].is_array());
    assert!(body["available_drivers"].is_array());
    assert!(body["conflicts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_input_error_envelope() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/booking/availability")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "pickup_date": "2025-06-05",
                        "pickup_time": "10:00:00",
                        "return_date": "2025-06-07",
                        "return_time": "10:00"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response.into_body()).await;
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["message"].is_string());
}

// Función helper para crear la app de test
//
// Handlers mínimos con el mismo contrato HTTP que la app real; la
// lógica de disponibilidad se cubre con tests unitarios en el crate.
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/test",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .route("/api/booking/availability", post(availability_stub))
}

async fn availability_stub(Json(request): Json<Value>) -> axum::response::Response {
    let time_ok = |v: &Value| {
        v.as_str()
            .map(|s| s.len() == 5 && s.as_bytes()[2] == b':')
            .unwrap_or(false)
    };

    if !time_ok(&request["pickup_time"]) || !time_ok(&request["return_time"]) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Validation Error",
                "message": "Hora inválida (formato HH:MM)",
                "code": "INVALID_INPUT"
            })),
        )
            .into_response();
    }

    Json(json!({
        "available_vehicles": [],
        "available_drivers": [],
        "conflicts": []
    }))
    .into_response()
}

async fn read_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
