use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::admin_dto::{AdminResponse, ApiResponse, RegisterAdminRequest};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::admin::Admin;
use crate::repositories::admin_repository::AdminRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AdminController {
    repository: AdminRepository,
    jwt_config: JwtConfig,
}

impl AdminController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: AdminRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn register(
        &self,
        request: RegisterAdminRequest,
    ) -> Result<ApiResponse<AdminResponse>, AppError> {
        request.validate()?;

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let admin = Admin::new(request.full_name, request.email, password_hash);
        let saved = self.repository.create(&admin).await?;

        Ok(ApiResponse::success_with_message(
            AdminResponse::from(saved),
            "Administrador registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        // Buscar administrador por email
        let admin = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        // Generar JWT token
        let token = generate_token(admin.id, &admin.email, &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            admin.id.to_string(),
            admin.full_name,
        ))
    }

    pub async fn me(&self, admin_id: Uuid) -> Result<AdminResponse, AppError> {
        let admin = self
            .repository
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Administrador no encontrado".to_string()))?;

        Ok(AdminResponse::from(admin))
    }
}
