use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::customer::Customer;

// Request para crear un cliente
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub license_number: Option<String>,
    pub address: Option<String>,
}

// Request para actualizar un cliente
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub address: Option<String>,
}

// Filtros de listado de clientes
#[derive(Debug, Deserialize)]
pub struct CustomerFilters {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub license_number: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name,
            email: customer.email,
            phone: customer.phone,
            license_number: customer.license_number,
            address: customer.address,
            created_at: customer.created_at,
        }
    }
}
