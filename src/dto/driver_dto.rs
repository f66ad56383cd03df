use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::driver::Driver;

// Request para crear un conductor
#[derive(Debug, Deserialize)]
pub struct CreateDriverRequest {
    pub full_name: String,
    pub phone: Option<String>,
    pub license_number: String,
}

// Request para actualizar un conductor
#[derive(Debug, Deserialize)]
pub struct UpdateDriverRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
}

// Request para actualizar el estado almacenado del conductor
#[derive(Debug, Deserialize)]
pub struct UpdateDriverStatusRequest {
    pub status: String,
}

// Filtros de listado de conductores
#[derive(Debug, Deserialize)]
pub struct DriverFilters {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub license_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            full_name: driver.full_name,
            phone: driver.phone,
            license_number: driver.license_number,
            status: driver.status,
            created_at: driver.created_at,
        }
    }
}
