use serde::{Deserialize, Serialize};

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub admin_id: Option<String>,
    pub full_name: Option<String>,
}

impl LoginResponse {
    pub fn success(token: String, admin_id: String, full_name: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            admin_id: Some(admin_id),
            full_name: Some(full_name),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            token: None,
            message: Some(message),
            admin_id: None,
            full_name: None,
        }
    }
}
