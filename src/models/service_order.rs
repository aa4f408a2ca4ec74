//! Modelo de ServiceOrder
//!
//! Órdenes de servicio generadas al procesar un vencimiento de renovación.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de pago de una orden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
        }
    }
}

/// ServiceOrder - mapea exactamente a la tabla service_orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceOrder {
    pub id: Uuid,
    pub renewal_due_id: Option<Uuid>,
    pub vehicle_id: Uuid,
    pub customer_name: String,
    pub order_type: String,
    pub amount: Decimal,
    pub payment_status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
