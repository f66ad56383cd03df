use sqlx::PgPool;
use uuid::Uuid;

use crate::models::admin::Admin;
use crate::utils::errors::AppError;

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, admin: &Admin) -> Result<Admin, AppError> {
        let saved = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (id, full_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(admin.id)
        .bind(&admin.full_name)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating admin: {}", e)))?;

        Ok(saved)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding admin: {}", e)))?;

        Ok(admin)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding admin by email: {}", e)))?;

        Ok(admin)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking email: {}", e)))?;

        Ok(result.0)
    }
}
