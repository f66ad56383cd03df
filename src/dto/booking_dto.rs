use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::driver_dto::DriverResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::booking::Booking;

// Request para crear una reserva
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
    pub total_amount: f64,
    pub promotion_id: Option<Uuid>,
    pub notes: Option<String>,
}

// Request para actualizar una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub customer_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub return_date: Option<String>,
    pub return_time: Option<String>,
    pub total_amount: Option<f64>,
    pub promotion_id: Option<Uuid>,
    pub notes: Option<String>,
}

// Request para transicionar el estado de una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

// Filtros de listado de reservas
#[derive(Debug, Deserialize)]
pub struct BookingFilters {
    pub status: Option<String>,
    pub vehicle_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Request del chequeo de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
    pub exclude_booking_id: Option<Uuid>,
}

// Response del chequeo de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available_vehicles: Vec<VehicleResponse>,
    pub available_drivers: Vec<DriverResponse>,
    pub conflicts: Vec<BookingResponse>,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub pickup_date: NaiveDate,
    pub pickup_time: String,
    pub return_date: NaiveDate,
    pub return_time: String,
    // Instantes combinados, derivados de la proyección única
    pub pickup_at: Option<String>,
    pub return_at: Option<String>,
    pub status: String,
    pub total_amount: f64,
    pub promotion_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let interval = booking.interval().ok();
        Self {
            id: booking.id,
            customer_id: booking.customer_id,
            vehicle_id: booking.vehicle_id,
            driver_id: booking.driver_id,
            pickup_date: booking.pickup_date,
            pickup_time: booking.pickup_time,
            return_date: booking.return_date,
            return_time: booking.return_time,
            pickup_at: interval.map(|i| i.pickup.format("%Y-%m-%dT%H:%M").to_string()),
            return_at: interval.map(|i| i.dropoff.format("%Y-%m-%dT%H:%M").to_string()),
            status: booking.status,
            total_amount: booking.total_amount.to_string().parse().unwrap_or(0.0),
            promotion_id: booking.promotion_id,
            notes: booking.notes,
            created_at: booking.created_at,
        }
    }
}
