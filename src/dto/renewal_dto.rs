use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::renewal_due::RenewalDue;

// Conteos insertados por el escaneo, una entrada por categoría
#[derive(Debug, Default, Clone, Serialize)]
pub struct RenewalCheckData {
    pub puc: u64,
    pub insurance: u64,
    pub tax: u64,
    pub fitness: u64,
    pub permit: u64,
    #[serde(rename = "taxDetails")]
    pub tax_details: u64,
    pub total: u64,
    #[serde(rename = "currentStatus")]
    pub current_status: Vec<RenewalStatusEntry>,
}

// Snapshot de vencimientos pendientes por tipo
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RenewalStatusEntry {
    pub renewal_type: String,
    pub total_count: i64,
    pub expired_count: i64,
    pub due_soon_count: i64,
}

// Resultado del auto-check diario (nunca falla hacia el caller)
#[derive(Debug, Serialize)]
pub struct AutoCheckData {
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RenewalCheckData>,
}

// Filtros para listar vencimientos
#[derive(Debug, Deserialize)]
pub struct DuesFilters {
    pub status: Option<String>,
    // YYYY-MM-DD
    pub due_before: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Request para procesar un vencimiento en orden de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct ProcessDueRequest {
    // Si se omite, se usa el nombre del titular del vehículo
    #[validate(length(min = 2, max = 100))]
    pub customer_name: Option<String>,
}

// Response de vencimiento
#[derive(Debug, Serialize)]
pub struct RenewalDueResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub renewal_type: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<RenewalDue> for RenewalDueResponse {
    fn from(due: RenewalDue) -> Self {
        Self {
            id: due.id,
            vehicle_id: due.vehicle_id,
            renewal_type: due.renewal_type,
            due_date: due.due_date,
            amount: due.amount,
            status: due.status,
            created_at: due.created_at,
        }
    }
}
