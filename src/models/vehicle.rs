//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su estado almacenado.
//!
//! El campo `status` es un resumen grueso de larga duración (mantenimiento,
//! reservado). La disponibilidad para un intervalo concreto NO se deriva de
//! este campo sino del solapamiento de reservas activas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado almacenado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Booked,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Booked => "booked",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(VehicleStatus::Available),
            "booked" => Some(VehicleStatus::Booked),
            "maintenance" => Some(VehicleStatus::Maintenance),
            _ => None,
        }
    }

    /// Valores aceptados por la API
    pub fn allowed() -> &'static [&'static str] {
        &["available", "booked", "maintenance"]
    }
}

/// Vehicle - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub daily_rate: rust_decimal::Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
