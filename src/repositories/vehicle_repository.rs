use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        license_plate: String,
        brand: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        daily_rate: f64,
    ) -> Result<Vehicle, AppError> {
        let rate = Decimal::from_f64_retain(daily_rate)
            .ok_or_else(|| AppError::ValidationError("Invalid daily rate value".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, license_plate, brand, model, year, daily_rate, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'available', $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(license_plate)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(rate)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    /// Conjunto candidato completo para el chequeo de disponibilidad
    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY license_plate")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn search(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR license_plate ILIKE '%' || $2 || '%'
                   OR brand ILIKE '%' || $2 || '%' OR model ILIKE '%' || $2 || '%')
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
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE license_plate = $1)")
                .bind(license_plate)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error checking license plate: {}", e))
                })?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        license_plate: Option<String>,
        brand: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        daily_rate: Option<f64>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let rate = if let Some(r) = daily_rate {
            Decimal::from_f64_retain(r)
                .ok_or_else(|| AppError::ValidationError("Invalid daily rate value".to_string()))?
        } else {
            current.daily_rate
        };

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET license_plate = $2, brand = $3, model = $4, year = $5, daily_rate = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(brand.or(current.brand))
        .bind(model.or(current.model))
        .bind(year.or(current.year))
        .bind(rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle status: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}
