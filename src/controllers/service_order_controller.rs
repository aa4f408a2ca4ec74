use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::service_order_dto::{OrderFilters, ServiceOrderResponse};
use crate::models::service_order::PaymentStatus;
use crate::repositories::service_order_repository::ServiceOrderRepository;
use crate::utils::errors::AppError;

pub struct ServiceOrderController {
    repository: ServiceOrderRepository,
}

impl ServiceOrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceOrderRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ServiceOrderResponse, AppError> {
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden no encontrada".to_string()))?;

        Ok(ServiceOrderResponse::from(order))
    }

    pub async fn list(&self, filters: OrderFilters) -> Result<Vec<ServiceOrderResponse>, AppError> {
        if let Some(status) = &filters.payment_status {
            let valid = [PaymentStatus::Unpaid.as_str(), PaymentStatus::Paid.as_str()];
            if !valid.contains(&status.as_str()) {
                return Err(AppError::BadRequest(
                    "payment_status debe ser 'unpaid' o 'paid'".to_string(),
                ));
            }
        }

        let orders = self.repository.list(&filters).await?;

        Ok(orders.into_iter().map(ServiceOrderResponse::from).collect())
    }

    /// Registra el pago; el vencimiento origen pasa a 'completed'
    pub async fn pay(&self, id: Uuid) -> Result<ApiResponse<ServiceOrderResponse>, AppError> {
        let order = self.repository.mark_paid(id).await?;

        Ok(ApiResponse::success_with_message(
            ServiceOrderResponse::from(order),
            "Pago registrado exitosamente".to_string(),
        ))
    }
}
