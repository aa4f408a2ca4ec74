//! Controller de documentos estatutarios
//!
//! El certificado de aptitud, el permiso y el impuesto de transporte solo
//! aplican a vehículos Transport; registrar uno sobre un vehículo
//! 'Non Transport' es un error del operador.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::document_dto::{
    UpsertFitnessRequest, UpsertInsuranceRequest, UpsertPermitRequest, UpsertPucRequest,
    UpsertTaxRequest, VehicleDocumentsResponse,
};
use crate::models::document::{
    FitnessDetail, InsuranceDetail, PermitDetail, PucDetail, TaxDetail,
};
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::repositories::document_repository::DocumentRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct DocumentController {
    documents: DocumentRepository,
    vehicles: VehicleRepository,
}

impl DocumentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            documents: DocumentRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    async fn require_vehicle(&self, vehicle_id: Uuid) -> Result<Vehicle, AppError> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))
    }

    fn require_transport(vehicle: &Vehicle, document: &str) -> Result<(), AppError> {
        if VehicleType::parse(&vehicle.vehicle_type) != Some(VehicleType::Transport) {
            return Err(AppError::BadRequest(format!(
                "{} solo aplica a vehículos Transport",
                document
            )));
        }
        Ok(())
    }

    pub async fn upsert_puc(
        &self,
        vehicle_id: Uuid,
        request: UpsertPucRequest,
    ) -> Result<PucDetail, AppError> {
        request.validate()?;
        self.require_vehicle(vehicle_id).await?;

        self.documents
            .upsert_puc(vehicle_id, request.puc_no, request.puc_from, request.puc_to)
            .await
    }

    pub async fn upsert_insurance(
        &self,
        vehicle_id: Uuid,
        request: UpsertInsuranceRequest,
    ) -> Result<InsuranceDetail, AppError> {
        request.validate()?;
        self.require_vehicle(vehicle_id).await?;

        self.documents
            .upsert_insurance(
                vehicle_id,
                request.policy_no,
                request.insurer_name,
                request.insurance_from,
                request.insurance_to,
            )
            .await
    }

    pub async fn upsert_fitness(
        &self,
        vehicle_id: Uuid,
        request: UpsertFitnessRequest,
    ) -> Result<FitnessDetail, AppError> {
        request.validate()?;
        let vehicle = self.require_vehicle(vehicle_id).await?;
        Self::require_transport(&vehicle, "El certificado de aptitud")?;

        self.documents
            .upsert_fitness(
                vehicle_id,
                request.fc_no,
                request.fc_tenure_from,
                request.fc_tenure_to,
            )
            .await
    }

    pub async fn upsert_permit(
        &self,
        vehicle_id: Uuid,
        request: UpsertPermitRequest,
    ) -> Result<PermitDetail, AppError> {
        request.validate()?;
        let vehicle = self.require_vehicle(vehicle_id).await?;
        Self::require_transport(&vehicle, "El permiso")?;

        self.documents
            .upsert_permit(
                vehicle_id,
                request.permit_no,
                request.permit_type,
                request.permit_tenure_from,
                request.permit_tenure_to,
            )
            .await
    }

    pub async fn upsert_tax(
        &self,
        vehicle_id: Uuid,
        request: UpsertTaxRequest,
    ) -> Result<TaxDetail, AppError> {
        request.validate()?;
        let vehicle = self.require_vehicle(vehicle_id).await?;
        Self::require_transport(&vehicle, "El impuesto de transporte")?;

        self.documents
            .upsert_tax(
                vehicle_id,
                request.tax_receipt_no,
                request.tax_tenure_from,
                request.tax_tenure_to,
            )
            .await
    }

    pub async fn get_documents(
        &self,
        vehicle_id: Uuid,
    ) -> Result<VehicleDocumentsResponse, AppError> {
        self.require_vehicle(vehicle_id).await?;

        Ok(VehicleDocumentsResponse {
            puc: self.documents.find_puc_by_vehicle(vehicle_id).await?,
            insurance: self.documents.find_insurance_by_vehicle(vehicle_id).await?,
            fitness: self.documents.find_fitness_by_vehicle(vehicle_id).await?,
            permit: self.documents.find_permit_by_vehicle(vehicle_id).await?,
            tax: self.documents.find_tax_by_vehicle(vehicle_id).await?,
        })
    }
}
