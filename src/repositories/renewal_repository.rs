use crate::dto::renewal_dto::DuesFilters;
use crate::models::renewal_due::{DueStatus, RenewalDue};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct RenewalRepository {
    pool: PgPool,
}

impl RenewalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RenewalDue>, AppError> {
        let due = sqlx::query_as::<_, RenewalDue>("SELECT * FROM renewal_dues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(due)
    }

    pub async fn list(
        &self,
        status: Option<DueStatus>,
        due_before: Option<NaiveDate>,
        filters: &DuesFilters,
    ) -> Result<Vec<RenewalDue>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let dues = sqlx::query_as::<_, RenewalDue>(
            r#"
            SELECT * FROM renewal_dues
            WHERE ($1::VARCHAR IS NULL OR status = $1)
              AND ($2::DATE IS NULL OR due_date < $2)
            ORDER BY due_date ASC, created_at ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .bind(due_before)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(dues)
    }

    /// Transición pending -> processing. Devuelve None si el vencimiento
    /// no existe o ya no está pendiente.
    pub async fn mark_processing(&self, id: Uuid) -> Result<Option<RenewalDue>, AppError> {
        let due = sqlx::query_as::<_, RenewalDue>(
            r#"
            UPDATE renewal_dues
            SET status = 'processing', updated_at = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(due)
    }

    /// Verifica si ya se creó algún vencimiento hoy (fecha IST).
    /// Es el throttle grueso del auto-check diario.
    pub async fn dues_created_today(&self, today: NaiveDate) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM renewal_dues
                WHERE (created_at AT TIME ZONE 'Asia/Kolkata')::date = $1
            )
            "#,
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
