use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::validation::REGISTRATION_NUMBER_RE;

// Request para registrar un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(regex = "REGISTRATION_NUMBER_RE")]
    pub registration_number: String,

    // 'Transport' | 'Non Transport'
    pub vehicle_type: String,

    #[validate(length(min = 2, max = 100))]
    pub owner_name: String,

    #[validate(length(min = 10, max = 15))]
    pub owner_phone: Option<String>,

    pub registration_date: NaiveDate,

    pub tax_upto: Option<NaiveDate>,
}

// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub owner_name: Option<String>,

    #[validate(length(min = 10, max = 15))]
    pub owner_phone: Option<String>,

    pub tax_upto: Option<NaiveDate>,
}

// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub registration_number: String,
    pub vehicle_type: String,
    pub owner_name: String,
    pub owner_phone: Option<String>,
    pub registration_date: NaiveDate,
    pub tax_upto: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            registration_number: vehicle.registration_number,
            vehicle_type: vehicle.vehicle_type,
            owner_name: vehicle.owner_name,
            owner_phone: vehicle.owner_phone,
            registration_date: vehicle.registration_date,
            tax_upto: vehicle.tax_upto,
            created_at: vehicle.created_at,
        }
    }
}

// Filtros para búsqueda de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub vehicle_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
