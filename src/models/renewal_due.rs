//! Modelo de RenewalDue
//!
//! Vencimientos de renovación detectados por el escáner. El dominio de
//! renewal_type está reconciliado a {PUC, Insurance, Tax, FC, Permit}.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de renovación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenewalType {
    #[serde(rename = "PUC")]
    Puc,
    Insurance,
    Tax,
    #[serde(rename = "FC")]
    Fc,
    Permit,
}

impl RenewalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenewalType::Puc => "PUC",
            RenewalType::Insurance => "Insurance",
            RenewalType::Tax => "Tax",
            RenewalType::Fc => "FC",
            RenewalType::Permit => "Permit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PUC" => Some(RenewalType::Puc),
            "Insurance" => Some(RenewalType::Insurance),
            "Tax" => Some(RenewalType::Tax),
            "FC" => Some(RenewalType::Fc),
            "Permit" => Some(RenewalType::Permit),
            _ => None,
        }
    }
}

impl std::fmt::Display for RenewalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estado del ciclo de vida de un vencimiento
///
/// pending -> processing (al convertirse en orden de servicio)
/// processing -> completed (al pagarse la orden)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    Pending,
    Processing,
    Completed,
}

impl DueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::Pending => "pending",
            DueStatus::Processing => "processing",
            DueStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(DueStatus::Pending),
            "processing" => Some(DueStatus::Processing),
            "completed" => Some(DueStatus::Completed),
            _ => None,
        }
    }
}

/// RenewalDue - mapea exactamente a la tabla renewal_dues
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RenewalDue {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub renewal_type: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renewal_type_labels() {
        // Las etiquetas deben coincidir con el check constraint de la tabla
        for (ty, label) in [
            (RenewalType::Puc, "PUC"),
            (RenewalType::Insurance, "Insurance"),
            (RenewalType::Tax, "Tax"),
            (RenewalType::Fc, "FC"),
            (RenewalType::Permit, "Permit"),
        ] {
            assert_eq!(ty.as_str(), label);
            assert_eq!(RenewalType::parse(label), Some(ty));
        }
    }

    #[test]
    fn test_due_status_round_trip() {
        assert_eq!(DueStatus::parse("pending"), Some(DueStatus::Pending));
        assert_eq!(DueStatus::parse("processing"), Some(DueStatus::Processing));
        assert_eq!(DueStatus::parse("completed"), Some(DueStatus::Completed));
        assert_eq!(DueStatus::parse("cancelled"), None);
    }
}
