use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::campaign_dto::{
    CampaignFilters, CampaignResponse, CreateCampaignRequest, UpdateCampaignRequest,
};
use crate::models::campaign::CampaignStatus;
use crate::repositories::campaign_repository::CampaignRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct CampaignController {
    repository: CampaignRepository,
}

impl CampaignController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CampaignRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCampaignRequest,
    ) -> Result<ApiResponse<CampaignResponse>, AppError> {
        // Validar campos
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError("El nombre es requerido".to_string()));
        }

        if request.destination.trim().is_empty() {
            return Err(AppError::ValidationError("El destino es requerido".to_string()));
        }

        let start_date = validate_date(&request.start_date).map_err(|_| {
            AppError::ValidationError("Fecha de inicio inválida (formato YYYY-MM-DD)".to_string())
        })?;
        let end_date = validate_date(&request.end_date).map_err(|_| {
            AppError::ValidationError("Fecha de fin inválida (formato YYYY-MM-DD)".to_string())
        })?;

        if end_date < start_date {
            return Err(AppError::ValidationError(
                "La fecha de fin debe ser posterior a la de inicio".to_string(),
            ));
        }

        if request.seats <= 0 {
            return Err(AppError::ValidationError(
                "La cantidad de asientos debe ser positiva".to_string(),
            ));
        }

        let price = Decimal::from_f64_retain(request.price_per_seat)
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| {
                AppError::ValidationError("El precio por asiento debe ser positivo".to_string())
            })?;

        let campaign = self
            .repository
            .create(
                request.name,
                request.destination,
                request.description,
                start_date,
                end_date,
                price,
                request.seats,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CampaignResponse::from(campaign),
            "Campaña creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CampaignResponse, AppError> {
        let campaign = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaña no encontrada".to_string()))?;

        Ok(CampaignResponse::from(campaign))
    }

    pub async fn list(&self, filters: CampaignFilters) -> Result<Vec<CampaignResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if CampaignStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado inválido, valores permitidos: {:?}",
                    CampaignStatus::allowed()
                )));
            }
        }

        let campaigns = self.repository.search(&filters).await?;

        Ok(campaigns.into_iter().map(CampaignResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCampaignRequest,
    ) -> Result<ApiResponse<CampaignResponse>, AppError> {
        let start_date = match request.start_date {
            Some(ref value) => Some(validate_date(value).map_err(|_| {
                AppError::ValidationError(
                    "Fecha de inicio inválida (formato YYYY-MM-DD)".to_string(),
                )
            })?),
            None => None,
        };

        let end_date = match request.end_date {
            Some(ref value) => Some(validate_date(value).map_err(|_| {
                AppError::ValidationError("Fecha de fin inválida (formato YYYY-MM-DD)".to_string())
            })?),
            None => None,
        };

        let price = match request.price_per_seat {
            Some(value) => Some(
                Decimal::from_f64_retain(value)
                    .filter(|p| *p > Decimal::ZERO)
                    .ok_or_else(|| {
                        AppError::ValidationError(
                            "El precio por asiento debe ser positivo".to_string(),
                        )
                    })?,
            ),
            None => None,
        };

        if let Some(ref status) = request.status {
            if CampaignStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado inválido, valores permitidos: {:?}",
                    CampaignStatus::allowed()
                )));
            }
        }

        if let Some(seats) = request.seats {
            if seats <= 0 {
                return Err(AppError::ValidationError(
                    "La cantidad de asientos debe ser positiva".to_string(),
                ));
            }
        }

        let campaign = self
            .repository
            .update(
                id,
                request.name,
                request.destination,
                request.description,
                start_date,
                end_date,
                price,
                request.seats,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CampaignResponse::from(campaign),
            "Campaña actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
