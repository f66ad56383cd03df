//! Modelo de Installment
//!
//! Cuotas de pago de una reserva. El plan se genera a partir del monto
//! total de la reserva y se liquida cuota por cuota.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la cuota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallmentStatus {
    Pending,
    Paid,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallmentStatus::Pending => "pending",
            InstallmentStatus::Paid => "paid",
        }
    }
}

/// Installment - mapea exactamente a la tabla installments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Installment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub installment_number: i32,
    pub due_date: NaiveDate,
    pub amount: rust_decimal::Decimal,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
