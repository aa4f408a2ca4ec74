use crate::models::agent::Agent;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AgentRepository {
    pool: PgPool,
}

impl AgentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        email: String,
        password_hash: String,
    ) -> Result<Agent, AppError> {
        let agent = sqlx::query_as::<_, Agent>(
            r#"
            INSERT INTO agents (id, full_name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, 'agent', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(agent)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(agent)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Agent>, AppError> {
        let agent = sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(agent)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM agents WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
