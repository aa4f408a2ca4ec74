//! Modelos de documentos estatutarios
//!
//! Una fila activa por vehículo y categoría. Cada tabla tiene su propia
//! columna de fin de vigencia, que es la que consume el escáner de
//! renovaciones.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Certificado PUC (control de emisiones)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PucDetail {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub puc_no: String,
    pub puc_from: NaiveDate,
    pub puc_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Póliza de seguro
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsuranceDetail {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub policy_no: String,
    pub insurer_name: String,
    pub insurance_from: NaiveDate,
    pub insurance_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Certificado de aptitud técnica (solo vehículos Transport)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FitnessDetail {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub fc_no: String,
    pub fc_tenure_from: NaiveDate,
    pub fc_tenure_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Permiso de circulación (solo vehículos Transport)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PermitDetail {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub permit_no: String,
    pub permit_type: String,
    pub permit_tenure_from: NaiveDate,
    pub permit_tenure_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recibo de impuesto de transporte (solo vehículos Transport)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaxDetail {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub tax_receipt_no: String,
    pub tax_tenure_from: NaiveDate,
    pub tax_tenure_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
