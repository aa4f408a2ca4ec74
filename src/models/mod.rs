//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod agent;
pub mod document;
pub mod renewal_due;
pub mod service_order;
pub mod vehicle;
