use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::customer_dto::CustomerFilters;
use crate::models::customer::Customer;
use crate::utils::errors::{not_found_error, AppError};

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        email: Option<String>,
        phone: String,
        license_number: Option<String>,
        address: Option<String>,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, full_name, email, phone, license_number, address, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(license_number)
        .bind(address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating customer: {}", e)))?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding customer: {}", e)))?;

        Ok(customer)
    }

    pub async fn search(&self, filters: &CustomerFilters) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT * FROM customers
            WHERE ($1::text IS NULL OR full_name ILIKE '%' || $1 || '%' OR phone ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&filters.search)
        .bind(filters.limit.unwrap_or(100))
        .bind(filters.offset.unwrap_or(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing customers: {}", e)))?;

        Ok(customers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        full_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        license_number: Option<String>,
        address: Option<String>,
    ) -> Result<Customer, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer", &id.to_string()))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET full_name = $2, email = $3, phone = $4, license_number = $5, address = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name.unwrap_or(current.full_name))
        .bind(email.or(current.email))
        .bind(phone.unwrap_or(current.phone))
        .bind(license_number.or(current.license_number))
        .bind(address.or(current.address))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating customer: {}", e)))?;

        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting customer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        Ok(())
    }
}
