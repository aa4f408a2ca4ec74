use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::service_order::ServiceOrder;

// Response de orden de servicio
#[derive(Debug, Serialize)]
pub struct ServiceOrderResponse {
    pub id: Uuid,
    pub renewal_due_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub customer_name: String,
    pub order_type: String,
    pub amount: Decimal,
    pub payment_status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceOrder> for ServiceOrderResponse {
    fn from(order: ServiceOrder) -> Self {
        Self {
            id: order.id,
            renewal_due_id: order.renewal_due_id,
            vehicle_id: order.vehicle_id,
            customer_name: order.customer_name,
            order_type: order.order_type,
            amount: order.amount,
            payment_status: order.payment_status,
            paid_at: order.paid_at,
            created_at: order.created_at,
        }
    }
}

// Filtros para listar órdenes
#[derive(Debug, Deserialize)]
pub struct OrderFilters {
    pub payment_status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
