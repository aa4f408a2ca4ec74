//! Repositorio de documentos estatutarios
//!
//! Cada categoría tiene una fila activa por vehículo; registrar una
//! renovación sobrescribe la vigencia anterior (upsert por vehicle_id).

use crate::models::document::{
    FitnessDetail, InsuranceDetail, PermitDetail, PucDetail, TaxDetail,
};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn upsert_puc(
        &self,
        vehicle_id: Uuid,
        puc_no: String,
        puc_from: NaiveDate,
        puc_to: NaiveDate,
    ) -> Result<PucDetail, AppError> {
        let detail = sqlx::query_as::<_, PucDetail>(
            r#"
            INSERT INTO puc_details (id, vehicle_id, puc_no, puc_from, puc_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (vehicle_id) DO UPDATE
            SET puc_no = EXCLUDED.puc_no,
                puc_from = EXCLUDED.puc_from,
                puc_to = EXCLUDED.puc_to,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(puc_no)
        .bind(puc_from)
        .bind(puc_to)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn upsert_insurance(
        &self,
        vehicle_id: Uuid,
        policy_no: String,
        insurer_name: String,
        insurance_from: NaiveDate,
        insurance_to: NaiveDate,
    ) -> Result<InsuranceDetail, AppError> {
        let detail = sqlx::query_as::<_, InsuranceDetail>(
            r#"
            INSERT INTO insurance_details (id, vehicle_id, policy_no, insurer_name, insurance_from, insurance_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ON CONFLICT (vehicle_id) DO UPDATE
            SET policy_no = EXCLUDED.policy_no,
                insurer_name = EXCLUDED.insurer_name,
                insurance_from = EXCLUDED.insurance_from,
                insurance_to = EXCLUDED.insurance_to,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(policy_no)
        .bind(insurer_name)
        .bind(insurance_from)
        .bind(insurance_to)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn upsert_fitness(
        &self,
        vehicle_id: Uuid,
        fc_no: String,
        fc_tenure_from: NaiveDate,
        fc_tenure_to: NaiveDate,
    ) -> Result<FitnessDetail, AppError> {
        let detail = sqlx::query_as::<_, FitnessDetail>(
            r#"
            INSERT INTO fitness_details (id, vehicle_id, fc_no, fc_tenure_from, fc_tenure_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (vehicle_id) DO UPDATE
            SET fc_no = EXCLUDED.fc_no,
                fc_tenure_from = EXCLUDED.fc_tenure_from,
                fc_tenure_to = EXCLUDED.fc_tenure_to,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(fc_no)
        .bind(fc_tenure_from)
        .bind(fc_tenure_to)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn upsert_permit(
        &self,
        vehicle_id: Uuid,
        permit_no: String,
        permit_type: String,
        permit_tenure_from: NaiveDate,
        permit_tenure_to: NaiveDate,
    ) -> Result<PermitDetail, AppError> {
        let detail = sqlx::query_as::<_, PermitDetail>(
            r#"
            INSERT INTO permit_details (id, vehicle_id, permit_no, permit_type, permit_tenure_from, permit_tenure_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ON CONFLICT (vehicle_id) DO UPDATE
            SET permit_no = EXCLUDED.permit_no,
                permit_type = EXCLUDED.permit_type,
                permit_tenure_from = EXCLUDED.permit_tenure_from,
                permit_tenure_to = EXCLUDED.permit_tenure_to,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(permit_no)
        .bind(permit_type)
        .bind(permit_tenure_from)
        .bind(permit_tenure_to)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn upsert_tax(
        &self,
        vehicle_id: Uuid,
        tax_receipt_no: String,
        tax_tenure_from: NaiveDate,
        tax_tenure_to: NaiveDate,
    ) -> Result<TaxDetail, AppError> {
        let detail = sqlx::query_as::<_, TaxDetail>(
            r#"
            INSERT INTO tax_details (id, vehicle_id, tax_receipt_no, tax_tenure_from, tax_tenure_to, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (vehicle_id) DO UPDATE
            SET tax_receipt_no = EXCLUDED.tax_receipt_no,
                tax_tenure_from = EXCLUDED.tax_tenure_from,
                tax_tenure_to = EXCLUDED.tax_tenure_to,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(tax_receipt_no)
        .bind(tax_tenure_from)
        .bind(tax_tenure_to)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn find_puc_by_vehicle(&self, vehicle_id: Uuid) -> Result<Option<PucDetail>, AppError> {
        let detail =
            sqlx::query_as::<_, PucDetail>("SELECT * FROM puc_details WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(detail)
    }

    pub async fn find_insurance_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<InsuranceDetail>, AppError> {
        let detail = sqlx::query_as::<_, InsuranceDetail>(
            "SELECT * FROM insurance_details WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn find_fitness_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<FitnessDetail>, AppError> {
        let detail = sqlx::query_as::<_, FitnessDetail>(
            "SELECT * FROM fitness_details WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn find_permit_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<PermitDetail>, AppError> {
        let detail = sqlx::query_as::<_, PermitDetail>(
            "SELECT * FROM permit_details WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn find_tax_by_vehicle(&self, vehicle_id: Uuid) -> Result<Option<TaxDetail>, AppError> {
        let detail =
            sqlx::query_as::<_, TaxDetail>("SELECT * FROM tax_details WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(detail)
    }
}
