use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::installment::Installment;

// Request para generar el plan de cuotas de una reserva
#[derive(Debug, Deserialize)]
pub struct GenerateInstallmentsRequest {
    pub count: u32,
    pub first_due_date: String,
}

// Response de cuota
#[derive(Debug, Serialize)]
pub struct InstallmentResponse {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub installment_number: i32,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Installment> for InstallmentResponse {
    fn from(installment: Installment) -> Self {
        Self {
            id: installment.id,
            booking_id: installment.booking_id,
            installment_number: installment.installment_number,
            due_date: installment.due_date,
            amount: installment.amount.to_string().parse().unwrap_or(0.0),
            status: installment.status,
            paid_at: installment.paid_at,
            created_at: installment.created_at,
        }
    }
}
