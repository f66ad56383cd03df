use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::promotion_dto::{
    CreatePromotionRequest, PromotionFilters, PromotionResponse, UpdatePromotionRequest,
};
use crate::repositories::promotion_repository::PromotionRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct PromotionController {
    repository: PromotionRepository,
}

impl PromotionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PromotionRepository::new(pool),
        }
    }

    fn parse_discount(value: f64) -> Result<Decimal, AppError> {
        Decimal::from_f64_retain(value)
            .filter(|d| *d > Decimal::ZERO && *d <= Decimal::from(100))
            .ok_or_else(|| {
                AppError::ValidationError(
                    "El descuento debe estar entre 0 y 100 por ciento".to_string(),
                )
            })
    }

    pub async fn create(
        &self,
        request: CreatePromotionRequest,
    ) -> Result<ApiResponse<PromotionResponse>, AppError> {
        // Validar campos
        if request.code.trim().is_empty() {
            return Err(AppError::ValidationError("El código es requerido".to_string()));
        }

        let discount = Self::parse_discount(request.discount_percent)?;

        let valid_from = validate_date(&request.valid_from).map_err(|_| {
            AppError::ValidationError("Fecha de inicio inválida (formato YYYY-MM-DD)".to_string())
        })?;
        let valid_until = validate_date(&request.valid_until).map_err(|_| {
            AppError::ValidationError("Fecha de fin inválida (formato YYYY-MM-DD)".to_string())
        })?;

        if valid_until < valid_from {
            return Err(AppError::ValidationError(
                "La vigencia debe terminar después de empezar".to_string(),
            ));
        }

        // Verificar que el código no exista
        if self.repository.code_exists(&request.code).await? {
            return Err(AppError::Conflict("El código ya está registrado".to_string()));
        }

        let promotion = self
            .repository
            .create(
                request.code,
                request.description,
                discount,
                valid_from,
                valid_until,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PromotionResponse::from(promotion),
            "Promoción creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PromotionResponse, AppError> {
        let promotion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promoción no encontrada".to_string()))?;

        Ok(PromotionResponse::from(promotion))
    }

    pub async fn list(
        &self,
        filters: PromotionFilters,
    ) -> Result<Vec<PromotionResponse>, AppError> {
        let promotions = self.repository.search(&filters).await?;

        Ok(promotions.into_iter().map(PromotionResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePromotionRequest,
    ) -> Result<ApiResponse<PromotionResponse>, AppError> {
        let discount = match request.discount_percent {
            Some(value) => Some(Self::parse_discount(value)?),
            None => None,
        };

        let valid_from = match request.valid_from {
            Some(ref value) => Some(validate_date(value).map_err(|_| {
                AppError::ValidationError(
                    "Fecha de inicio inválida (formato YYYY-MM-DD)".to_string(),
                )
            })?),
            None => None,
        };

        let valid_until = match request.valid_until {
            Some(ref value) => Some(validate_date(value).map_err(|_| {
                AppError::ValidationError("Fecha de fin inválida (formato YYYY-MM-DD)".to_string())
            })?),
            None => None,
        };

        let promotion = self
            .repository
            .update(
                id,
                request.code,
                request.description,
                discount,
                valid_from,
                valid_until,
                request.active,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PromotionResponse::from(promotion),
            "Promoción actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
