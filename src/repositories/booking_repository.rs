use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::BookingFilters;
use crate::models::booking::Booking;
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        customer_id: Uuid,
        vehicle_id: Uuid,
        driver_id: Option<Uuid>,
        pickup_date: NaiveDate,
        pickup_time: String,
        return_date: NaiveDate,
        return_time: String,
        total_amount: Decimal,
        promotion_id: Option<Uuid>,
        notes: Option<String>,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (id, customer_id, vehicle_id, driver_id, pickup_date, pickup_time,
                 return_date, return_time, status, total_amount, promotion_id, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'confirmed', $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(pickup_date)
        .bind(pickup_time)
        .bind(return_date)
        .bind(return_time)
        .bind(total_amount)
        .bind(promotion_id)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }

    /// Snapshot completo de reservas para el chequeo de disponibilidad
    ///
    /// Una lectura por invocación; el filtrado por estado y por reserva
    /// excluida es responsabilidad del servicio de disponibilidad.
    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY pickup_date, pickup_time")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    pub async fn search(&self, filters: &BookingFilters) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR vehicle_id = $2)
              AND ($3::uuid IS NULL OR customer_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&filters.status)
        .bind(filters.vehicle_id)
        .bind(filters.customer_id)
        .bind(filters.limit.unwrap_or(100))
        .bind(filters.offset.unwrap_or(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        customer_id: Option<Uuid>,
        vehicle_id: Option<Uuid>,
        driver_id: Option<Uuid>,
        pickup_date: NaiveDate,
        pickup_time: String,
        return_date: NaiveDate,
        return_time: String,
        total_amount: Decimal,
        promotion_id: Option<Uuid>,
        notes: Option<String>,
    ) -> Result<Booking, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET customer_id = $2, vehicle_id = $3, driver_id = $4,
                pickup_date = $5, pickup_time = $6, return_date = $7, return_time = $8,
                total_amount = $9, promotion_id = $10, notes = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(customer_id.unwrap_or(current.customer_id))
        .bind(vehicle_id.unwrap_or(current.vehicle_id))
        .bind(driver_id.or(current.driver_id))
        .bind(pickup_date)
        .bind(pickup_time)
        .bind(return_date)
        .bind(return_time)
        .bind(total_amount)
        .bind(promotion_id.or(current.promotion_id))
        .bind(notes.or(current.notes))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating booking status: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(booking)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting booking: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        Ok(())
    }
}
