//! Modelo de Customer
//!
//! Clientes del sistema de alquiler de vehículos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Customer - mapea exactamente a la tabla customers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub license_number: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}
