use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::models::vehicle::VehicleType;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle_type = VehicleType::parse(&request.vehicle_type).ok_or_else(|| {
            AppError::BadRequest(
                "vehicle_type debe ser 'Transport' o 'Non Transport'".to_string(),
            )
        })?;

        // Verificar que la matrícula no exista
        if self
            .repository
            .registration_exists(&request.registration_number)
            .await?
        {
            return Err(AppError::Conflict(
                "El número de registro ya está dado de alta".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                request.registration_number,
                vehicle_type.as_str().to_string(),
                request.owner_name,
                request.owner_phone,
                request.registration_date,
                request.tax_upto,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn get_by_registration(
        &self,
        registration_number: &str,
    ) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_registration(registration_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        if let Some(vehicle_type) = &filters.vehicle_type {
            if VehicleType::parse(vehicle_type).is_none() {
                return Err(AppError::BadRequest(
                    "vehicle_type debe ser 'Transport' o 'Non Transport'".to_string(),
                ));
            }
        }

        let vehicles = self.repository.list(&filters).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(id, request.owner_name, request.owner_phone, request.tax_upto)
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
