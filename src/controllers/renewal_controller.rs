//! Controller del escáner de renovaciones
//!
//! Expone el escaneo manual, el auto-check de login y el procesamiento de
//! vencimientos en órdenes de servicio.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::renewal_dto::{
    AutoCheckData, DuesFilters, ProcessDueRequest, RenewalCheckData, RenewalDueResponse,
};
use crate::dto::service_order_dto::ServiceOrderResponse;
use crate::models::renewal_due::DueStatus;
use crate::repositories::renewal_repository::RenewalRepository;
use crate::repositories::service_order_repository::ServiceOrderRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::renewal_scanner::RenewalScannerService;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct RenewalController {
    scanner: RenewalScannerService,
    renewals: RenewalRepository,
    orders: ServiceOrderRepository,
    vehicles: VehicleRepository,
}

impl RenewalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            scanner: RenewalScannerService::new(pool.clone()),
            renewals: RenewalRepository::new(pool.clone()),
            orders: ServiceOrderRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn check_dues(&self) -> Result<ApiResponse<RenewalCheckData>, AppError> {
        let data = self.scanner.run_check().await?;

        let message = format!("Escaneo completado: {} vencimientos nuevos", data.total);
        Ok(ApiResponse::success_with_message(data, message))
    }

    /// El auto-check nunca devuelve error; cualquier fallo interno queda
    /// como warning dentro de la respuesta.
    pub async fn auto_check(&self) -> ApiResponse<AutoCheckData> {
        let data = self.scanner.auto_check().await;

        let message = if data.skipped {
            "Escaneo ya realizado hoy".to_string()
        } else {
            "Escaneo automático ejecutado".to_string()
        };

        ApiResponse::success_with_message(data, message)
    }

    pub async fn list_dues(
        &self,
        filters: DuesFilters,
    ) -> Result<Vec<RenewalDueResponse>, AppError> {
        let status = match &filters.status {
            Some(value) => Some(DueStatus::parse(value).ok_or_else(|| {
                AppError::BadRequest(
                    "status debe ser 'pending', 'processing' o 'completed'".to_string(),
                )
            })?),
            None => None,
        };

        let due_before = match &filters.due_before {
            Some(value) => Some(validate_date(value).map_err(|_| {
                AppError::BadRequest("due_before debe tener formato YYYY-MM-DD".to_string())
            })?),
            None => None,
        };

        let dues = self.renewals.list(status, due_before, &filters).await?;

        Ok(dues.into_iter().map(RenewalDueResponse::from).collect())
    }

    pub async fn process_due(
        &self,
        due_id: Uuid,
        request: ProcessDueRequest,
    ) -> Result<ApiResponse<ServiceOrderResponse>, AppError> {
        request.validate()?;

        let due = self
            .renewals
            .find_by_id(due_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vencimiento no encontrado".to_string()))?;

        // Si no viene nombre de cliente, se usa el titular del vehículo
        let customer_name = match request.customer_name {
            Some(name) => name,
            None => {
                self.vehicles
                    .find_by_id(due.vehicle_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?
                    .owner_name
            }
        };

        let order = self.orders.create_from_due(due_id, customer_name).await?;

        Ok(ApiResponse::success_with_message(
            ServiceOrderResponse::from(order),
            "Orden de servicio creada".to_string(),
        ))
    }
}
