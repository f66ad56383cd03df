use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::campaign_dto::CampaignFilters;
use crate::models::campaign::Campaign;
use crate::utils::errors::AppError;

pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        destination: String,
        description: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        price_per_seat: Decimal,
        seats: i32,
    ) -> Result<Campaign, AppError> {
        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            INSERT INTO campaigns
                (id, name, destination, description, start_date, end_date,
                 price_per_seat, seats, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'planned', $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(destination)
        .bind(description)
        .bind(start_date)
        .bind(end_date)
        .bind(price_per_seat)
        .bind(seats)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating campaign: {}", e)))?;

        Ok(campaign)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Campaign>, AppError> {
        let campaign = sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding campaign: {}", e)))?;

        Ok(campaign)
    }

    pub async fn search(&self, filters: &CampaignFilters) -> Result<Vec<Campaign>, AppError> {
        let campaigns = sqlx::query_as::<_, Campaign>(
            r#"
            SELECT * FROM campaigns
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%'
                   OR destination ILIKE '%' || $2 || '%')
            ORDER BY start_date DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&filters.status)
        .bind(&filters.search)
        .bind(filters.limit.unwrap_or(100))
        .bind(filters.offset.unwrap_or(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing campaigns: {}", e)))?;

        Ok(campaigns)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        destination: Option<String>,
        description: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        price_per_seat: Option<Decimal>,
        seats: Option<i32>,
        status: Option<String>,
    ) -> Result<Campaign, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            UPDATE campaigns
            SET name = $2, destination = $3, description = $4, start_date = $5,
                end_date = $6, price_per_seat = $7, seats = $8, status = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(destination.unwrap_or(current.destination))
        .bind(description.or(current.description))
        .bind(start_date.unwrap_or(current.start_date))
        .bind(end_date.unwrap_or(current.end_date))
        .bind(price_per_seat.unwrap_or(current.price_per_seat))
        .bind(seats.unwrap_or(current.seats))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating campaign: {}", e)))?;

        Ok(campaign)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting campaign: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Campaign not found".to_string()));
        }

        Ok(())
    }
}
