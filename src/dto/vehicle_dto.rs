use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::Vehicle;

// Request para crear un vehículo
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub daily_rate: f64,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub daily_rate: Option<f64>,
}

// Request para actualizar el estado almacenado del vehículo
// (estados de larga duración como mantenimiento)
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: String,
    pub notes: Option<String>,
}

// Filtros de listado de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub daily_rate: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            daily_rate: vehicle.daily_rate.to_string().parse().unwrap_or(0.0),
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}
