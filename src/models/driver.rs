//! Modelo de Driver
//!
//! Conductores asignables a reservas. Igual que con los vehículos, el
//! campo `status` solo modela estados de larga duración (franco/baja);
//! la disponibilidad por intervalo se deriva de las reservas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado almacenado del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Available,
    Off,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::Off => "off",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(DriverStatus::Available),
            "off" => Some(DriverStatus::Off),
            _ => None,
        }
    }

    pub fn allowed() -> &'static [&'static str] {
        &["available", "off"]
    }
}

/// Driver - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub license_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
