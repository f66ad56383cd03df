use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::installment_dto::{GenerateInstallmentsRequest, InstallmentResponse};
use crate::models::installment::InstallmentStatus;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::installment_repository::InstallmentRepository;
use crate::services::installment_service::build_schedule;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct InstallmentController {
    installments: InstallmentRepository,
    bookings: BookingRepository,
}

impl InstallmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            installments: InstallmentRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    /// Generar el plan de cuotas de una reserva a partir de su monto total
    pub async fn generate_plan(
        &self,
        booking_id: Uuid,
        request: GenerateInstallmentsRequest,
    ) -> Result<ApiResponse<Vec<InstallmentResponse>>, AppError> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        // Un plan por reserva; para regenerar hay que borrar el existente
        if self.installments.exists_for_booking(booking_id).await? {
            return Err(AppError::Conflict(
                "La reserva ya tiene un plan de cuotas".to_string(),
            ));
        }

        let first_due = validate_date(&request.first_due_date).map_err(|_| {
            AppError::ValidationError(
                "Fecha de primer vencimiento inválida (formato YYYY-MM-DD)".to_string(),
            )
        })?;

        let drafts = build_schedule(booking.total_amount, request.count, first_due)?;
        let saved = self.installments.create_plan(booking_id, &drafts).await?;

        Ok(ApiResponse::success_with_message(
            saved.into_iter().map(InstallmentResponse::from).collect(),
            "Plan de cuotas generado exitosamente".to_string(),
        ))
    }

    pub async fn list_by_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<InstallmentResponse>, AppError> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let installments = self.installments.find_by_booking(booking_id).await?;

        Ok(installments
            .into_iter()
            .map(InstallmentResponse::from)
            .collect())
    }

    pub async fn pay(&self, id: Uuid) -> Result<ApiResponse<InstallmentResponse>, AppError> {
        let installment = self
            .installments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cuota no encontrada".to_string()))?;

        if installment.status == InstallmentStatus::Paid.as_str() {
            return Err(AppError::Conflict("La cuota ya está pagada".to_string()));
        }

        let paid = self.installments.mark_paid(id).await?;

        Ok(ApiResponse::success_with_message(
            InstallmentResponse::from(paid),
            "Cuota pagada exitosamente".to_string(),
        ))
    }

    pub async fn delete_plan(&self, booking_id: Uuid) -> Result<u64, AppError> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let deleted = self.installments.delete_by_booking(booking_id).await?;
        Ok(deleted)
    }
}
