//! Servicio de autenticación de agentes
//!
//! Registro y login con hash bcrypt y emisión de tokens JWT.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{AgentResponse, AuthResponse, LoginRequest, RegisterAgentRequest};
use crate::repositories::agent_repository::AgentRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthService {
    repository: AgentRepository,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: AgentRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn register(&self, request: RegisterAgentRequest) -> Result<AuthResponse, AppError> {
        if self.repository.email_exists(&request.email).await? {
            return Err(conflict_error("Agent", "email", &request.email));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error generando hash: {}", e)))?;

        let agent = self
            .repository
            .create(request.full_name, request.email, password_hash)
            .await?;

        info!("👤 Agente registrado: {}", agent.email);

        let token = generate_token(agent.id, &agent.role, &self.jwt_config)?;

        Ok(AuthResponse {
            token,
            agent: AgentResponse::from(agent),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let agent = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &agent.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando hash: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(agent.id, &agent.role, &self.jwt_config)?;

        Ok(AuthResponse {
            token,
            agent: AgentResponse::from(agent),
        })
    }

    pub async fn me(&self, agent_id: Uuid) -> Result<AgentResponse, AppError> {
        let agent = self
            .repository
            .find_by_id(agent_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agente no encontrado".to_string()))?;

        Ok(AgentResponse::from(agent))
    }
}
