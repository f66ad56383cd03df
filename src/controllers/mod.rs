//! Controllers de la API
//!
//! Validación de requests, chequeos de unicidad y mapeo a DTOs.
//! El acceso a datos queda en los repositorios.

pub mod admin_controller;
pub mod booking_controller;
pub mod campaign_controller;
pub mod customer_controller;
pub mod driver_controller;
pub mod installment_controller;
pub mod promotion_controller;
pub mod vehicle_controller;
