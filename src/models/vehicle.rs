//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y los tipos asociados.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de vehículo según el registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Non Transport")]
    NonTransport,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Transport => "Transport",
            VehicleType::NonTransport => "Non Transport",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Transport" => Some(VehicleType::Transport),
            "Non Transport" => Some(VehicleType::NonTransport),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub registration_number: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub owner_phone: Option<String>,
    pub registration_date: NaiveDate,
    pub tax_upto: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_round_trip() {
        assert_eq!(VehicleType::parse("Transport"), Some(VehicleType::Transport));
        assert_eq!(VehicleType::parse("Non Transport"), Some(VehicleType::NonTransport));
        assert_eq!(VehicleType::parse("Bicycle"), None);
        assert_eq!(VehicleType::NonTransport.as_str(), "Non Transport");
    }
}
