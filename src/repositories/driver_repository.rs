use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::driver_dto::DriverFilters;
use crate::models::driver::Driver;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        phone: Option<String>,
        license_number: String,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, full_name, phone, license_number, status, created_at)
            VALUES ($1, $2, $3, $4, 'available', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(phone)
        .bind(license_number)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating driver: {}", e)))?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding driver: {}", e)))?;

        Ok(driver)
    }

    /// Conjunto candidato completo para el chequeo de disponibilidad
    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY full_name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing drivers: {}", e)))?;

        Ok(drivers)
    }

    pub async fn search(&self, filters: &DriverFilters) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR full_name ILIKE '%' || $2 || '%'
                   OR license_number ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&filters.status)
        .bind(&filters.search)
        .bind(filters.limit.unwrap_or(100))
        .bind(filters.offset.unwrap_or(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing drivers: {}", e)))?;

        Ok(drivers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        full_name: Option<String>,
        phone: Option<String>,
        license_number: Option<String>,
    ) -> Result<Driver, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET full_name = $2, phone = $3, license_number = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name.unwrap_or(current.full_name))
        .bind(phone.or(current.phone))
        .bind(license_number.unwrap_or(current.license_number))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating driver: {}", e)))?;

        Ok(driver)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            "UPDATE drivers SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating driver status: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(driver)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting driver: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(())
    }
}
