use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::customer_dto::{
    CreateCustomerRequest, CustomerFilters, CustomerResponse, UpdateCustomerRequest,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_email, validate_phone};

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        // Validar campos
        if request.full_name.trim().is_empty() {
            return Err(AppError::ValidationError("El nombre es requerido".to_string()));
        }

        if validate_phone(&request.phone).is_err() {
            return Err(AppError::ValidationError("Teléfono inválido".to_string()));
        }

        if let Some(ref email) = request.email {
            if validate_email(email).is_err() {
                return Err(AppError::ValidationError("Email inválido".to_string()));
            }
        }

        let customer = self
            .repository
            .create(
                request.full_name,
                request.email,
                request.phone,
                request.license_number,
                request.address,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(CustomerResponse::from(customer))
    }

    pub async fn list(&self, filters: CustomerFilters) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.search(&filters).await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, AppError> {
        if let Some(ref phone) = request.phone {
            if validate_phone(phone).is_err() {
                return Err(AppError::ValidationError("Teléfono inválido".to_string()));
            }
        }

        if let Some(ref email) = request.email {
            if validate_email(email).is_err() {
                return Err(AppError::ValidationError("Email inválido".to_string()));
            }
        }

        let customer = self
            .repository
            .update(
                id,
                request.full_name,
                request.email,
                request.phone,
                request.license_number,
                request.address,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CustomerResponse::from(customer),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
