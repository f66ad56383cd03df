use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::promotion::Promotion;

// Request para crear una promoción
#[derive(Debug, Deserialize)]
pub struct CreatePromotionRequest {
    pub code: String,
    pub description: Option<String>,
    pub discount_percent: f64,
    pub valid_from: String,
    pub valid_until: String,
}

// Request para actualizar una promoción
#[derive(Debug, Deserialize)]
pub struct UpdatePromotionRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub discount_percent: Option<f64>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
    pub active: Option<bool>,
}

// Filtros de listado de promociones
#[derive(Debug, Deserialize)]
pub struct PromotionFilters {
    pub active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de promoción
#[derive(Debug, Serialize)]
pub struct PromotionResponse {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    pub discount_percent: f64,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Promotion> for PromotionResponse {
    fn from(promotion: Promotion) -> Self {
        Self {
            id: promotion.id,
            code: promotion.code,
            description: promotion.description,
            discount_percent: promotion.discount_percent.to_string().parse().unwrap_or(0.0),
            valid_from: promotion.valid_from,
            valid_until: promotion.valid_until,
            active: promotion.active,
            created_at: promotion.created_at,
        }
    }
}
