//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla; encapsulan todo el SQL de CRUD. El escáner
//! de renovaciones mantiene su propio SQL transaccional en services.

pub mod agent_repository;
pub mod document_repository;
pub mod renewal_repository;
pub mod service_order_repository;
pub mod vehicle_repository;
