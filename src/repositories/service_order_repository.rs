use crate::dto::service_order_dto::OrderFilters;
use crate::models::renewal_due::RenewalDue;
use crate::models::service_order::ServiceOrder;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ServiceOrderRepository {
    pool: PgPool,
}

impl ServiceOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea una orden a partir de un vencimiento pendiente, en una sola
    /// transacción: el vencimiento pasa a 'processing' y la orden hereda
    /// su importe y tipo.
    pub async fn create_from_due(
        &self,
        due_id: Uuid,
        customer_name: String,
    ) -> Result<ServiceOrder, AppError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let due = sqlx::query_as::<_, RenewalDue>(
            r#"
            UPDATE renewal_dues
            SET status = 'processing', updated_at = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(due_id)
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::Conflict("El vencimiento no existe o ya fue procesado".to_string())
        })?;

        let order = sqlx::query_as::<_, ServiceOrder>(
            r#"
            INSERT INTO service_orders (id, renewal_due_id, vehicle_id, customer_name, order_type, amount, payment_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'unpaid', $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(due.id)
        .bind(due.vehicle_id)
        .bind(customer_name)
        .bind(&due.renewal_type)
        .bind(due.amount)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!(
            "🧾 Orden {} creada desde vencimiento {} ({})",
            order.id,
            due.id,
            order.order_type
        );

        Ok(order)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOrder>, AppError> {
        let order = sqlx::query_as::<_, ServiceOrder>("SELECT * FROM service_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    pub async fn list(&self, filters: &OrderFilters) -> Result<Vec<ServiceOrder>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let orders = sqlx::query_as::<_, ServiceOrder>(
            r#"
            SELECT * FROM service_orders
            WHERE ($1::VARCHAR IS NULL OR payment_status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filters.payment_status.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Registra el pago de una orden y completa el vencimiento origen
    /// (processing -> completed) en la misma transacción.
    pub async fn mark_paid(&self, id: Uuid) -> Result<ServiceOrder, AppError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let order = sqlx::query_as::<_, ServiceOrder>(
            r#"
            UPDATE service_orders
            SET payment_status = 'paid', paid_at = $2, updated_at = $2
            WHERE id = $1 AND payment_status = 'unpaid'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Conflict("La orden no existe o ya fue pagada".to_string()))?;

        if let Some(due_id) = order.renewal_due_id {
            sqlx::query(
                r#"
                UPDATE renewal_dues
                SET status = 'completed', updated_at = $2
                WHERE id = $1
                "#,
            )
            .bind(due_id)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        log::info!("💳 Pago registrado para la orden {}", order.id);

        Ok(order)
    }
}
