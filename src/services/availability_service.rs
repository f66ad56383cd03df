//! Servicio de disponibilidad
//!
//! Dado un intervalo candidato de alquiler, determina qué vehículos y
//! conductores están libres comparando contra todas las reservas no
//! canceladas, y expone las reservas en conflicto para que el caller
//! pueda mostrarlas.
//!
//! El chequeo es una pasada lineal, pura y de solo lectura sobre un
//! snapshot cargado una vez por invocación. No toma locks ni cierra la
//! ventana entre chequear y reservar.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::booking::{Booking, RentalInterval};
use crate::models::driver::Driver;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_time};

/// Snapshot de datos sobre el que se evalúa la disponibilidad
#[derive(Debug)]
pub struct AvailabilitySnapshot {
    pub bookings: Vec<Booking>,
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
}

/// Resultado del chequeo de disponibilidad
#[derive(Debug)]
pub struct AvailabilityOutcome {
    pub available_vehicles: Vec<Vehicle>,
    pub available_drivers: Vec<Driver>,
    pub conflicts: Vec<Booking>,
}

/// Combinar fecha + hora de retiro y devolución en un intervalo candidato
///
/// Strings malformados y devolución no posterior al retiro se rechazan
/// como error de validación, nunca se coercionan.
pub fn parse_candidate_interval(
    pickup_date: &str,
    pickup_time: &str,
    return_date: &str,
    return_time: &str,
) -> Result<RentalInterval, AppError> {
    let pickup_date = validate_date(pickup_date).map_err(|_| {
        AppError::ValidationError("Fecha de retiro inválida (formato YYYY-MM-DD)".to_string())
    })?;
    let pickup_time = validate_time(pickup_time).map_err(|_| {
        AppError::ValidationError("Hora de retiro inválida (formato HH:MM)".to_string())
    })?;
    let return_date = validate_date(return_date).map_err(|_| {
        AppError::ValidationError("Fecha de devolución inválida (formato YYYY-MM-DD)".to_string())
    })?;
    let return_time = validate_time(return_time).map_err(|_| {
        AppError::ValidationError("Hora de devolución inválida (formato HH:MM)".to_string())
    })?;

    RentalInterval::new(
        pickup_date.and_time(pickup_time),
        return_date.and_time(return_time),
    )
    .ok_or_else(|| {
        AppError::ValidationError("La devolución debe ser posterior al retiro".to_string())
    })
}

/// Chequear disponibilidad de vehículos y conductores para un intervalo
///
/// Una reserva participa del chequeo si no está cancelada y no es la
/// reserva excluida (flujo de edición: la reserva no entra en conflicto
/// consigo misma). Un vehículo está disponible sii ninguna reserva en
/// conflicto lo referencia; ídem conductores, donde las reservas sin
/// conductor asignado nunca bloquean.
pub fn check_availability(
    candidate: &RentalInterval,
    exclude_booking_id: Option<Uuid>,
    snapshot: AvailabilitySnapshot,
) -> Result<AvailabilityOutcome, AppError> {
    let AvailabilitySnapshot {
        bookings,
        vehicles,
        drivers,
    } = snapshot;

    let mut conflicts = Vec::new();
    for booking in bookings {
        if booking.is_cancelled() {
            continue;
        }
        if exclude_booking_id.map_or(false, |id| id == booking.id) {
            continue;
        }
        if booking.interval()?.overlaps(candidate) {
            conflicts.push(booking);
        }
    }

    let busy_vehicles: HashSet<Uuid> = conflicts.iter().map(|b| b.vehicle_id).collect();
    let busy_drivers: HashSet<Uuid> = conflicts.iter().filter_map(|b| b.driver_id).collect();

    let available_vehicles = vehicles
        .into_iter()
        .filter(|v| !busy_vehicles.contains(&v.id))
        .collect();
    let available_drivers = drivers
        .into_iter()
        .filter(|d| !busy_drivers.contains(&d.id))
        .collect();

    Ok(AvailabilityOutcome {
        available_vehicles,
        available_drivers,
        conflicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatus;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn vehicle(id: Uuid) -> Vehicle {
        Vehicle {
            id,
            license_plate: "AB-123-CD".to_string(),
            brand: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2022),
            daily_rate: Decimal::new(4500, 2),
            status: "available".to_string(),
            created_at: Utc::now(),
        }
    }

    fn driver(id: Uuid) -> Driver {
        Driver {
            id,
            full_name: "Carlos Medina".to_string(),
            phone: Some("0991234567".to_string()),
            license_number: "DL-9981".to_string(),
            status: "available".to_string(),
            created_at: Utc::now(),
        }
    }

    fn booking(
        vehicle_id: Uuid,
        driver_id: Option<Uuid>,
        pickup: (&str, &str),
        dropoff: (&str, &str),
        status: BookingStatus,
    ) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            vehicle_id,
            driver_id,
            pickup_date: NaiveDate::parse_from_str(pickup.0, "%Y-%m-%d").unwrap(),
            pickup_time: pickup.1.to_string(),
            return_date: NaiveDate::parse_from_str(dropoff.0, "%Y-%m-%d").unwrap(),
            return_time: dropoff.1.to_string(),
            status: status.as_str().to_string(),
            total_amount: Decimal::new(30000, 2),
            promotion_id: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn candidate(pickup: (&str, &str), dropoff: (&str, &str)) -> RentalInterval {
        parse_candidate_interval(pickup.0, pickup.1, dropoff.0, dropoff.1).unwrap()
    }

    #[test]
    fn overlapping_booking_is_a_conflict() {
        let v = Uuid::new_v4();
        let b = booking(
            v,
            None,
            ("2025-06-06", "09:00"),
            ("2025-06-08", "09:00"),
            BookingStatus::Confirmed,
        );
        let outcome = check_availability(
            &candidate(("2025-06-05", "10:00"), ("2025-06-07", "10:00")),
            None,
            AvailabilitySnapshot {
                bookings: vec![b],
                vehicles: vec![vehicle(v)],
                drivers: vec![],
            },
        )
        .unwrap();

        assert_eq!(outcome.conflicts.len(), 1);
        assert!(outcome.available_vehicles.is_empty());
    }

    #[test]
    fn back_to_back_bookings_do_not_conflict() {
        let v = Uuid::new_v4();
        // La devolución del candidato coincide con el retiro de la reserva:
        // intervalo semiabierto, el instante compartido no es solapamiento
        let b = booking(
            v,
            None,
            ("2025-06-07", "10:00"),
            ("2025-06-09", "10:00"),
            BookingStatus::Confirmed,
        );
        let outcome = check_availability(
            &candidate(("2025-06-05", "10:00"), ("2025-06-07", "10:00")),
            None,
            AvailabilitySnapshot {
                bookings: vec![b],
                vehicles: vec![vehicle(v)],
                drivers: vec![],
            },
        )
        .unwrap();

        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.available_vehicles.len(), 1);
    }

    #[test]
    fn excluded_booking_does_not_conflict_with_itself() {
        let v = Uuid::new_v4();
        let b = booking(
            v,
            None,
            ("2025-06-05", "10:00"),
            ("2025-06-07", "10:00"),
            BookingStatus::Confirmed,
        );
        let own_id = b.id;
        let outcome = check_availability(
            &candidate(("2025-06-05", "10:00"), ("2025-06-07", "10:00")),
            Some(own_id),
            AvailabilitySnapshot {
                bookings: vec![b],
                vehicles: vec![vehicle(v)],
                drivers: vec![],
            },
        )
        .unwrap();

        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.available_vehicles.len(), 1);
    }

    #[test]
    fn cancelled_bookings_are_inert() {
        let v = Uuid::new_v4();
        let b = booking(
            v,
            None,
            ("2025-06-05", "10:00"),
            ("2025-06-07", "10:00"),
            BookingStatus::Cancelled,
        );
        let outcome = check_availability(
            &candidate(("2025-06-05", "12:00"), ("2025-06-06", "12:00")),
            None,
            AvailabilitySnapshot {
                bookings: vec![b],
                vehicles: vec![vehicle(v)],
                drivers: vec![],
            },
        )
        .unwrap();

        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.available_vehicles.len(), 1);
    }

    #[test]
    fn completed_bookings_still_block() {
        // Solo cancelled queda fuera del chequeo; completed conserva el
        // comportamiento de bloquear el intervalo
        let v = Uuid::new_v4();
        let b = booking(
            v,
            None,
            ("2025-06-05", "10:00"),
            ("2025-06-07", "10:00"),
            BookingStatus::Completed,
        );
        let outcome = check_availability(
            &candidate(("2025-06-05", "12:00"), ("2025-06-06", "12:00")),
            None,
            AvailabilitySnapshot {
                bookings: vec![b],
                vehicles: vec![vehicle(v)],
                drivers: vec![],
            },
        )
        .unwrap();

        assert_eq!(outcome.conflicts.len(), 1);
        assert!(outcome.available_vehicles.is_empty());
    }

    #[test]
    fn bookings_without_driver_do_not_block_drivers() {
        let v = Uuid::new_v4();
        let d = Uuid::new_v4();
        let b = booking(
            v,
            None,
            ("2025-06-05", "10:00"),
            ("2025-06-07", "10:00"),
            BookingStatus::Confirmed,
        );
        let outcome = check_availability(
            &candidate(("2025-06-05", "12:00"), ("2025-06-06", "12:00")),
            None,
            AvailabilitySnapshot {
                bookings: vec![b],
                vehicles: vec![vehicle(v)],
                drivers: vec![driver(d)],
            },
        )
        .unwrap();

        // El vehículo queda bloqueado pero el conductor sigue libre
        assert_eq!(outcome.conflicts.len(), 1);
        assert!(outcome.available_vehicles.is_empty());
        assert_eq!(outcome.available_drivers.len(), 1);
    }

    #[test]
    fn empty_system_reports_everything_available() {
        let outcome = check_availability(
            &candidate(("2025-06-05", "10:00"), ("2025-06-07", "10:00")),
            None,
            AvailabilitySnapshot {
                bookings: vec![],
                vehicles: vec![vehicle(Uuid::new_v4()), vehicle(Uuid::new_v4())],
                drivers: vec![driver(Uuid::new_v4())],
            },
        )
        .unwrap();

        assert!(outcome.conflicts.is_empty());
        assert_eq!(outcome.available_vehicles.len(), 2);
        assert_eq!(outcome.available_drivers.len(), 1);
    }

    #[test]
    fn availability_partition_invariant() {
        // available_vehicles = vehiculos - referenciados por conflicts;
        // ídem conductores restringido a driver_id no nulo
        let v1 = Uuid::new_v4();
        let v2 = Uuid::new_v4();
        let v3 = Uuid::new_v4();
        let d1 = Uuid::new_v4();
        let d2 = Uuid::new_v4();

        let bookings = vec![
            booking(
                v1,
                Some(d1),
                ("2025-06-05", "08:00"),
                ("2025-06-06", "08:00"),
                BookingStatus::Confirmed,
            ),
            booking(
                v2,
                None,
                ("2025-06-05", "08:00"),
                ("2025-06-06", "08:00"),
                BookingStatus::InProgress,
            ),
            booking(
                v3,
                Some(d2),
                ("2025-06-05", "08:00"),
                ("2025-06-06", "08:00"),
                BookingStatus::Cancelled,
            ),
        ];

        let outcome = check_availability(
            &candidate(("2025-06-05", "10:00"), ("2025-06-05", "12:00")),
            None,
            AvailabilitySnapshot {
                bookings,
                vehicles: vec![vehicle(v1), vehicle(v2), vehicle(v3)],
                drivers: vec![driver(d1), driver(d2)],
            },
        )
        .unwrap();

        let conflict_vehicles: HashSet<Uuid> =
            outcome.conflicts.iter().map(|b| b.vehicle_id).collect();
        let conflict_drivers: HashSet<Uuid> =
            outcome.conflicts.iter().filter_map(|b| b.driver_id).collect();

        assert_eq!(outcome.conflicts.len(), 2);
        for v in &outcome.available_vehicles {
            assert!(!conflict_vehicles.contains(&v.id));
        }
        for d in &outcome.available_drivers {
            assert!(!conflict_drivers.contains(&d.id));
        }
        assert_eq!(
            outcome.available_vehicles.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![v3]
        );
        assert_eq!(
            outcome.available_drivers.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![d2]
        );
    }

    #[test]
    fn candidate_interval_rejects_malformed_input() {
        // Con segundos
        assert!(parse_candidate_interval("2025-06-05", "10:00:00", "2025-06-07", "10:00").is_err());
        // Sin cero a la izquierda
        assert!(parse_candidate_interval("2025-06-05", "9:00", "2025-06-07", "10:00").is_err());
        // Fecha malformada
        assert!(parse_candidate_interval("05/06/2025", "10:00", "2025-06-07", "10:00").is_err());
        // Invertido
        assert!(parse_candidate_interval("2025-06-07", "10:00", "2025-06-05", "10:00").is_err());
        // Longitud cero
        assert!(parse_candidate_interval("2025-06-05", "10:00", "2025-06-05", "10:00").is_err());
    }
}
