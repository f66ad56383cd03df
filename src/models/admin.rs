//! Modelo de Administrator
//!
//! Administradores del sistema de alquiler. Son los únicos usuarios
//! que acceden a la API de administración.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Administrator - mapea exactamente a la tabla admins
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(full_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
