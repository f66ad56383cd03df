use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, UpdateVehicleStatusRequest, VehicleFilters,
    VehicleResponse,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::validate_license_plate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos
        if validate_license_plate(&request.license_plate).is_err() {
            return Err(AppError::ValidationError("Matrícula inválida".to_string()));
        }

        if request.daily_rate <= 0.0 {
            return Err(AppError::ValidationError(
                "La tarifa diaria debe ser positiva".to_string(),
            ));
        }

        // Verificar que la matrícula no exista
        if self
            .repository
            .license_plate_exists(&request.license_plate)
            .await?
        {
            return Err(conflict_error("Vehicle", "license plate", &request.license_plate));
        }

        let vehicle = self
            .repository
            .create(
                request.license_plate,
                request.brand,
                request.model,
                request.year,
                request.daily_rate,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if VehicleStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado inválido, valores permitidos: {:?}",
                    VehicleStatus::allowed()
                )));
            }
        }

        let vehicles = self.repository.search(&filters).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        if let Some(ref plate) = request.license_plate {
            if validate_license_plate(plate).is_err() {
                return Err(AppError::ValidationError("Matrícula inválida".to_string()));
            }
        }

        if let Some(rate) = request.daily_rate {
            if rate <= 0.0 {
                return Err(AppError::ValidationError(
                    "La tarifa diaria debe ser positiva".to_string(),
                ));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.license_plate,
                request.brand,
                request.model,
                request.year,
                request.daily_rate,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Actualizar el estado almacenado (estados de larga duración como
    /// mantenimiento). La disponibilidad por intervalo no pasa por acá.
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateVehicleStatusRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let status = VehicleStatus::parse(&request.status).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Estado inválido, valores permitidos: {:?}",
                VehicleStatus::allowed()
            ))
        })?;

        let vehicle = self.repository.update_status(id, status.as_str()).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Estado del vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
