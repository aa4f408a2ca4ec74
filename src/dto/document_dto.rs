use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::document::{
    FitnessDetail, InsuranceDetail, PermitDetail, PucDetail, TaxDetail,
};

// Request para registrar/renovar el certificado PUC
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPucRequest {
    #[validate(length(min = 1, max = 50))]
    pub puc_no: String,
    pub puc_from: NaiveDate,
    pub puc_to: NaiveDate,
}

// Request para registrar/renovar la póliza de seguro
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertInsuranceRequest {
    #[validate(length(min = 1, max = 50))]
    pub policy_no: String,
    #[validate(length(min = 2, max = 100))]
    pub insurer_name: String,
    pub insurance_from: NaiveDate,
    pub insurance_to: NaiveDate,
}

// Request para registrar/renovar el certificado de aptitud
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertFitnessRequest {
    #[validate(length(min = 1, max = 50))]
    pub fc_no: String,
    pub fc_tenure_from: NaiveDate,
    pub fc_tenure_to: NaiveDate,
}

// Request para registrar/renovar el permiso
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPermitRequest {
    #[validate(length(min = 1, max = 50))]
    pub permit_no: String,
    #[validate(length(min = 1, max = 50))]
    pub permit_type: String,
    pub permit_tenure_from: NaiveDate,
    pub permit_tenure_to: NaiveDate,
}

// Request para registrar/renovar el recibo de impuesto de transporte
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertTaxRequest {
    #[validate(length(min = 1, max = 50))]
    pub tax_receipt_no: String,
    pub tax_tenure_from: NaiveDate,
    pub tax_tenure_to: NaiveDate,
}

// Todos los documentos de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleDocumentsResponse {
    pub puc: Option<PucDetail>,
    pub insurance: Option<InsuranceDetail>,
    pub fitness: Option<FitnessDetail>,
    pub permit: Option<PermitDetail>,
    pub tax: Option<TaxDetail>,
}
