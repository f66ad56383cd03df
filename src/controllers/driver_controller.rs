use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::driver_dto::{
    CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest,
    UpdateDriverStatusRequest,
};
use crate::models::driver::DriverStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_phone;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        // Validar campos
        if request.full_name.trim().is_empty() {
            return Err(AppError::ValidationError("El nombre es requerido".to_string()));
        }

        if request.license_number.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El número de licencia es requerido".to_string(),
            ));
        }

        if let Some(ref phone) = request.phone {
            if validate_phone(phone).is_err() {
                return Err(AppError::ValidationError("Teléfono inválido".to_string()));
            }
        }

        let driver = self
            .repository
            .create(request.full_name, request.phone, request.license_number)
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        Ok(DriverResponse::from(driver))
    }

    pub async fn list(&self, filters: DriverFilters) -> Result<Vec<DriverResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if DriverStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado inválido, valores permitidos: {:?}",
                    DriverStatus::allowed()
                )));
            }
        }

        let drivers = self.repository.search(&filters).await?;

        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        if let Some(ref phone) = request.phone {
            if validate_phone(phone).is_err() {
                return Err(AppError::ValidationError("Teléfono inválido".to_string()));
            }
        }

        let driver = self
            .repository
            .update(id, request.full_name, request.phone, request.license_number)
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    /// Actualizar el estado almacenado (franco/baja). La disponibilidad
    /// por intervalo no pasa por acá.
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateDriverStatusRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let status = DriverStatus::parse(&request.status).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Estado inválido, valores permitidos: {:?}",
                DriverStatus::allowed()
            ))
        })?;

        let driver = self.repository.update_status(id, status.as_str()).await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Estado del conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
