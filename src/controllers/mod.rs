//! Controllers de la API
//!
//! Validan la entrada y orquestan repositorios y servicios.

pub mod auth_controller;
pub mod document_controller;
pub mod renewal_controller;
pub mod service_order_controller;
pub mod vehicle_controller;
