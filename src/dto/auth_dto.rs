use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::agent::Agent;

// Request para registrar un agente
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAgentRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

// Response de agente (sin password)
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<Agent> for AgentResponse {
    fn from(agent: Agent) -> Self {
        Self {
            id: agent.id,
            full_name: agent.full_name,
            email: agent.email,
            role: agent.role,
            created_at: agent.created_at,
        }
    }
}

// Response de autenticación
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub agent: AgentResponse,
}
