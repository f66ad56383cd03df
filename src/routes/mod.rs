pub mod auth_routes;
pub mod booking_routes;
pub mod campaign_routes;
pub mod customer_routes;
pub mod driver_routes;
pub mod installment_routes;
pub mod promotion_routes;
pub mod vehicle_routes;
