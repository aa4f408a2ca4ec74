use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        registration_number: String,
        vehicle_type: String,
        owner_name: String,
        owner_phone: Option<String>,
        registration_date: NaiveDate,
        tax_upto: Option<NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let now = Utc::now();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, registration_number, vehicle_type, owner_name, owner_phone, registration_date, tax_upto, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(registration_number)
        .bind(vehicle_type)
        .bind(owner_name)
        .bind(owner_phone)
        .bind(registration_date)
        .bind(tax_upto)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_registration(
        &self,
        registration_number: &str,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE registration_number = $1")
                .bind(registration_number)
                .fetch_optional(&self.pool)
                .await?;

        Ok(vehicle)
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let vehicles = match &filters.vehicle_type {
            Some(vehicle_type) => {
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT * FROM vehicles
                    WHERE vehicle_type = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(vehicle_type)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehicle>(
                    "SELECT * FROM vehicles ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_name: Option<String>,
        owner_phone: Option<String>,
        tax_upto: Option<NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET owner_name = $2, owner_phone = $3, tax_upto = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_name.unwrap_or(current.owner_name))
        .bind(owner_phone.or(current.owner_phone))
        .bind(tax_upto.or(current.tax_upto))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn registration_exists(&self, registration_number: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE registration_number = $1)",
        )
        .bind(registration_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
