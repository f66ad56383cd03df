//! Servicio de cuotas
//!
//! Genera el plan de cuotas de una reserva: montos iguales redondeados a
//! dos decimales con vencimientos cada 30 días, donde la última cuota
//! absorbe el resto del redondeo para que la suma sea exacta.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Cuota generada, todavía sin persistir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentDraft {
    pub installment_number: i32,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}

/// Máximo de cuotas aceptado por reserva
pub const MAX_INSTALLMENTS: u32 = 36;

/// Generar el plan de cuotas para un monto total
pub fn build_schedule(
    total: Decimal,
    count: u32,
    first_due: NaiveDate,
) -> Result<Vec<InstallmentDraft>, AppError> {
    if count < 1 || count > MAX_INSTALLMENTS {
        return Err(AppError::ValidationError(format!(
            "El número de cuotas debe estar entre 1 y {}",
            MAX_INSTALLMENTS
        )));
    }
    if total <= Decimal::ZERO {
        return Err(AppError::ValidationError(
            "El monto total debe ser positivo".to_string(),
        ));
    }

    let per_installment = (total / Decimal::from(count)).round_dp(2);

    let mut drafts = Vec::with_capacity(count as usize);
    let mut allocated = Decimal::ZERO;
    for i in 0..count {
        let amount = if i == count - 1 {
            // La última cuota absorbe el resto del redondeo
            total - allocated
        } else {
            per_installment
        };
        allocated += amount;

        drafts.push(InstallmentDraft {
            installment_number: (i + 1) as i32,
            due_date: first_due + Duration::days(30 * i as i64),
            amount,
        });
    }

    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn schedule_sums_exactly_to_total() {
        let total = Decimal::new(10000, 2); // 100.00
        let drafts = build_schedule(total, 3, date("2025-06-05")).unwrap();

        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].amount, Decimal::new(3333, 2));
        assert_eq!(drafts[1].amount, Decimal::new(3333, 2));
        assert_eq!(drafts[2].amount, Decimal::new(3334, 2));

        let sum: Decimal = drafts.iter().map(|d| d.amount).sum();
        assert_eq!(sum, total);
    }

    #[test]
    fn single_installment_equals_total() {
        let total = Decimal::new(45990, 2);
        let drafts = build_schedule(total, 1, date("2025-06-05")).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].amount, total);
        assert_eq!(drafts[0].installment_number, 1);
    }

    #[test]
    fn due_dates_step_thirty_days() {
        let drafts = build_schedule(Decimal::new(9000, 2), 3, date("2025-01-01")).unwrap();

        assert_eq!(drafts[0].due_date, date("2025-01-01"));
        assert_eq!(drafts[1].due_date, date("2025-01-31"));
        assert_eq!(drafts[2].due_date, date("2025-03-02"));
    }

    #[test]
    fn rejects_invalid_count_and_total() {
        assert!(build_schedule(Decimal::new(10000, 2), 0, date("2025-06-05")).is_err());
        assert!(build_schedule(Decimal::new(10000, 2), 37, date("2025-06-05")).is_err());
        assert!(build_schedule(Decimal::ZERO, 3, date("2025-06-05")).is_err());
    }
}
