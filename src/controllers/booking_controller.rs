use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::ApiResponse;
use crate::dto::booking_dto::{
    AvailabilityRequest, AvailabilityResponse, BookingFilters, BookingResponse,
    CreateBookingRequest, UpdateBookingRequest, UpdateBookingStatusRequest,
};
use crate::dto::driver_dto::DriverResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::booking::BookingStatus;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::promotion_repository::PromotionRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability_service::{
    check_availability, parse_candidate_interval, AvailabilitySnapshot,
};
use crate::utils::errors::AppError;

pub struct BookingController {
    bookings: BookingRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    customers: CustomerRepository,
    promotions: PromotionRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            promotions: PromotionRepository::new(pool),
        }
    }

    /// Chequeo de disponibilidad para un intervalo candidato
    ///
    /// Lectura pura: un snapshot de reservas, vehículos y conductores y
    /// una pasada lineal. No reserva ni retiene nada; la ventana entre
    /// chequear y crear la reserva queda abierta por diseño.
    pub async fn check_availability(
        &self,
        request: AvailabilityRequest,
    ) -> Result<AvailabilityResponse, AppError> {
        let candidate = parse_candidate_interval(
            &request.pickup_date,
            &request.pickup_time,
            &request.return_date,
            &request.return_time,
        )?;

        let snapshot = AvailabilitySnapshot {
            bookings: self.bookings.find_all().await?,
            vehicles: self.vehicles.find_all().await?,
            drivers: self.drivers.find_all().await?,
        };

        let outcome = check_availability(&candidate, request.exclude_booking_id, snapshot)?;

        log::info!(
            "🔍 Disponibilidad chequeada: {} vehículos libres, {} conductores libres, {} conflictos",
            outcome.available_vehicles.len(),
            outcome.available_drivers.len(),
            outcome.conflicts.len()
        );

        Ok(AvailabilityResponse {
            available_vehicles: outcome
                .available_vehicles
                .into_iter()
                .map(VehicleResponse::from)
                .collect(),
            available_drivers: outcome
                .available_drivers
                .into_iter()
                .map(DriverResponse::from)
                .collect(),
            conflicts: outcome
                .conflicts
                .into_iter()
                .map(BookingResponse::from)
                .collect(),
        })
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        // El intervalo se valida acá, antes de persistir; el chequeo de
        // disponibilidad es un paso aparte que el caller ya corrió (y
        // puede haber decidido continuar con conflictos a la vista)
        let candidate = parse_candidate_interval(
            &request.pickup_date,
            &request.pickup_time,
            &request.return_date,
            &request.return_time,
        )?;

        let total_amount = Decimal::from_f64_retain(request.total_amount)
            .filter(|t| *t > Decimal::ZERO)
            .ok_or_else(|| {
                AppError::ValidationError("El monto total debe ser positivo".to_string())
            })?;

        // Verificar referencias
        self.customers
            .find_by_id(request.customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if let Some(driver_id) = request.driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;
        }

        if let Some(promotion_id) = request.promotion_id {
            self.promotions
                .find_by_id(promotion_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Promoción no encontrada".to_string()))?;
        }

        let booking = self
            .bookings
            .create(
                request.customer_id,
                request.vehicle_id,
                request.driver_id,
                candidate.pickup.date(),
                request.pickup_time,
                candidate.dropoff.date(),
                request.return_time,
                total_amount,
                request.promotion_id,
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(BookingResponse::from(booking))
    }

    pub async fn list(&self, filters: BookingFilters) -> Result<Vec<BookingResponse>, AppError> {
        if let Some(ref status) = filters.status {
            if BookingStatus::parse(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Estado inválido, valores permitidos: {:?}",
                    BookingStatus::allowed()
                )));
            }
        }

        let bookings = self.bookings.search(&filters).await?;

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let current = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        // Combinar los campos del request con los almacenados y validar
        // el intervalo resultante completo
        let pickup_date = request
            .pickup_date
            .unwrap_or_else(|| current.pickup_date.format("%Y-%m-%d").to_string());
        let pickup_time = request
            .pickup_time
            .unwrap_or_else(|| current.pickup_time.clone());
        let return_date = request
            .return_date
            .unwrap_or_else(|| current.return_date.format("%Y-%m-%d").to_string());
        let return_time = request
            .return_time
            .unwrap_or_else(|| current.return_time.clone());

        let candidate =
            parse_candidate_interval(&pickup_date, &pickup_time, &return_date, &return_time)?;

        let total_amount = match request.total_amount {
            Some(total) => Decimal::from_f64_retain(total)
                .filter(|t| *t > Decimal::ZERO)
                .ok_or_else(|| {
                    AppError::ValidationError("El monto total debe ser positivo".to_string())
                })?,
            None => current.total_amount,
        };

        // Verificar referencias nuevas
        if let Some(customer_id) = request.customer_id {
            self.customers
                .find_by_id(customer_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
        }

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
        }

        if let Some(driver_id) = request.driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;
        }

        if let Some(promotion_id) = request.promotion_id {
            self.promotions
                .find_by_id(promotion_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Promoción no encontrada".to_string()))?;
        }

        let booking = self
            .bookings
            .update(
                id,
                request.customer_id,
                request.vehicle_id,
                request.driver_id,
                candidate.pickup.date(),
                pickup_time,
                candidate.dropoff.date(),
                return_time,
                total_amount,
                request.promotion_id,
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }

    /// Transicionar el estado de la reserva
    ///
    /// confirmed -> in_progress -> completed, o -> cancelled en cualquier
    /// punto antes de completarse.
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let next = BookingStatus::parse(&request.status).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Estado inválido, valores permitidos: {:?}",
                BookingStatus::allowed()
            ))
        })?;

        let current = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let from = BookingStatus::parse(&current.status).ok_or_else(|| {
            AppError::Internal(format!("Reserva {} con estado desconocido", current.id))
        })?;

        let allowed = matches!(
            (from, next),
            (BookingStatus::Confirmed, BookingStatus::InProgress)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::InProgress, BookingStatus::Completed)
                | (BookingStatus::InProgress, BookingStatus::Cancelled)
        );

        if !allowed {
            return Err(AppError::Conflict(format!(
                "Transición de estado inválida: {} -> {}",
                from.as_str(),
                next.as_str()
            )));
        }

        let booking = self.bookings.update_status(id, next.as_str()).await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Estado de la reserva actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.bookings.delete(id).await?;
        Ok(())
    }
}
