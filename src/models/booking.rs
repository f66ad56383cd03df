//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking, su ciclo de vida y la
//! proyección reserva -> intervalo de alquiler.
//!
//! El retiro y la devolución se almacenan como fecha calendario más hora
//! de reloj "HH:MM" en campos separados. La proyección a instantes vive
//! en un único lugar (`Booking::interval`) y la usan tanto el chequeo de
//! disponibilidad como la serialización de respuestas.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::validation::validate_time;

/// Estado de la reserva
///
/// Transiciones: confirmed -> in_progress -> completed, o -> cancelled
/// en cualquier punto antes de completarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(BookingStatus::Confirmed),
            "in_progress" => Some(BookingStatus::InProgress),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn allowed() -> &'static [&'static str] {
        &["confirmed", "in_progress", "completed", "cancelled"]
    }
}

/// Intervalo de alquiler semiabierto [retiro, devolución)
///
/// Resolución de fecha + minuto; los segundos no se modelan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalInterval {
    pub pickup: NaiveDateTime,
    pub dropoff: NaiveDateTime,
}

impl RentalInterval {
    /// Construir un intervalo. Devuelve None si la devolución no es
    /// estrictamente posterior al retiro.
    pub fn new(pickup: NaiveDateTime, dropoff: NaiveDateTime) -> Option<Self> {
        if dropoff > pickup {
            Some(Self { pickup, dropoff })
        } else {
            None
        }
    }

    /// Test de solapamiento semiabierto: [a1,a2) y [b1,b2) se solapan
    /// sii a1 < b2 y b1 < a2. Los extremos compartidos no cuentan.
    pub fn overlaps(&self, other: &RentalInterval) -> bool {
        self.pickup < other.dropoff && other.pickup < self.dropoff
    }
}

/// Booking - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub pickup_date: NaiveDate,
    pub pickup_time: String,
    pub return_date: NaiveDate,
    pub return_time: String,
    pub status: String,
    pub total_amount: rust_decimal::Decimal,
    pub promotion_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Proyección única reserva -> intervalo de alquiler
    ///
    /// Los campos almacenados se validan al crear la reserva; si aun así
    /// una fila llega corrupta, se reporta como error interno y no como
    /// error de entrada del caller.
    pub fn interval(&self) -> Result<RentalInterval, AppError> {
        let pickup_time = validate_time(&self.pickup_time).map_err(|_| {
            AppError::Internal(format!("Reserva {} con hora de retiro inválida", self.id))
        })?;
        let return_time = validate_time(&self.return_time).map_err(|_| {
            AppError::Internal(format!("Reserva {} con hora de devolución inválida", self.id))
        })?;

        RentalInterval::new(
            self.pickup_date.and_time(pickup_time),
            self.return_date.and_time(return_time),
        )
        .ok_or_else(|| {
            AppError::Internal(format!("Reserva {} con intervalo invertido", self.id))
        })
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled.as_str()
    }
}
