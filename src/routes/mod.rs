pub mod auth_routes;
pub mod document_routes;
pub mod renewal_routes;
pub mod service_order_routes;
pub mod vehicle_routes;
