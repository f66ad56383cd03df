//! Modelo de Promotion
//!
//! Promociones con código y porcentaje de descuento aplicables a reservas.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Promotion - mapea exactamente a la tabla promotions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Promotion {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    pub discount_percent: rust_decimal::Decimal,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
