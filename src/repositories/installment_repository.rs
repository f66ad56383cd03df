use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::installment::Installment;
use crate::services::installment_service::InstallmentDraft;
use crate::utils::errors::AppError;

pub struct InstallmentRepository {
    pool: PgPool,
}

impl InstallmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persistir el plan de cuotas generado para una reserva
    pub async fn create_plan(
        &self,
        booking_id: Uuid,
        drafts: &[InstallmentDraft],
    ) -> Result<Vec<Installment>, AppError> {
        let mut saved = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let installment = sqlx::query_as::<_, Installment>(
                r#"
                INSERT INTO installments
                    (id, booking_id, installment_number, due_date, amount, status, paid_at, created_at)
                VALUES ($1, $2, $3, $4, $5, 'pending', NULL, $6)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(booking_id)
            .bind(draft.installment_number)
            .bind(draft.due_date)
            .bind(draft.amount)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error creating installment: {}", e)))?;

            saved.push(installment);
        }

        Ok(saved)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Installment>, AppError> {
        let installment =
            sqlx::query_as::<_, Installment>("SELECT * FROM installments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error finding installment: {}", e)))?;

        Ok(installment)
    }

    pub async fn find_by_booking(&self, booking_id: Uuid) -> Result<Vec<Installment>, AppError> {
        let installments = sqlx::query_as::<_, Installment>(
            "SELECT * FROM installments WHERE booking_id = $1 ORDER BY installment_number",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing installments: {}", e)))?;

        Ok(installments)
    }

    pub async fn exists_for_booking(&self, booking_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM installments WHERE booking_id = $1)")
                .bind(booking_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error checking installments: {}", e))
                })?;

        Ok(result.0)
    }

    pub async fn mark_paid(&self, id: Uuid) -> Result<Installment, AppError> {
        let installment = sqlx::query_as::<_, Installment>(
            "UPDATE installments SET status = 'paid', paid_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating installment: {}", e)))?
        .ok_or_else(|| AppError::NotFound("Installment not found".to_string()))?;

        Ok(installment)
    }

    pub async fn delete_by_booking(&self, booking_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM installments WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting installments: {}", e)))?;

        Ok(result.rows_affected())
    }
}
