use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{AgentResponse, AuthResponse, LoginRequest, RegisterAgentRequest};
use crate::services::auth_service::AuthService;
use crate::utils::errors::AppError;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            service: AuthService::new(pool, config),
        }
    }

    pub async fn register(&self, request: RegisterAgentRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;
        self.service.register(request).await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;
        self.service.login(request).await
    }

    pub async fn me(&self, agent_id: Uuid) -> Result<AgentResponse, AppError> {
        self.service.me(agent_id).await
    }
}
