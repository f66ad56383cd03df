use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::promotion_dto::PromotionFilters;
use crate::models::promotion::Promotion;
use crate::utils::errors::AppError;

pub struct PromotionRepository {
    pool: PgPool,
}

impl PromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        code: String,
        description: Option<String>,
        discount_percent: Decimal,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    ) -> Result<Promotion, AppError> {
        let promotion = sqlx::query_as::<_, Promotion>(
            r#"
            INSERT INTO promotions
                (id, code, description, discount_percent, valid_from, valid_until, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, true, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(code)
        .bind(description)
        .bind(discount_percent)
        .bind(valid_from)
        .bind(valid_until)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating promotion: {}", e)))?;

        Ok(promotion)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Promotion>, AppError> {
        let promotion = sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding promotion: {}", e)))?;

        Ok(promotion)
    }

    pub async fn search(&self, filters: &PromotionFilters) -> Result<Vec<Promotion>, AppError> {
        let promotions = sqlx::query_as::<_, Promotion>(
            r#"
            SELECT * FROM promotions
            WHERE ($1::boolean IS NULL OR active = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filters.active)
        .bind(filters.limit.unwrap_or(100))
        .bind(filters.offset.unwrap_or(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing promotions: {}", e)))?;

        Ok(promotions)
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM promotions WHERE code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking code: {}", e)))?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        code: Option<String>,
        description: Option<String>,
        discount_percent: Option<Decimal>,
        valid_from: Option<NaiveDate>,
        valid_until: Option<NaiveDate>,
        active: Option<bool>,
    ) -> Result<Promotion, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promotion not found".to_string()))?;

        let promotion = sqlx::query_as::<_, Promotion>(
            r#"
            UPDATE promotions
            SET code = $2, description = $3, discount_percent = $4,
                valid_from = $5, valid_until = $6, active = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(code.unwrap_or(current.code))
        .bind(description.or(current.description))
        .bind(discount_percent.unwrap_or(current.discount_percent))
        .bind(valid_from.unwrap_or(current.valid_from))
        .bind(valid_until.unwrap_or(current.valid_until))
        .bind(active.unwrap_or(current.active))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating promotion: {}", e)))?;

        Ok(promotion)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting promotion: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Promotion not found".to_string()));
        }

        Ok(())
    }
}
