//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla. Toda la SQL vive acá; los controllers no
//! tocan el pool directamente.

pub mod admin_repository;
pub mod booking_repository;
pub mod campaign_repository;
pub mod customer_repository;
pub mod driver_repository;
pub mod installment_repository;
pub mod promotion_repository;
pub mod vehicle_repository;
