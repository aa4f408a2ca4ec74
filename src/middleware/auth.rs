//! Middleware de autenticación
//!
//! Valida el token Bearer y deja la identidad del agente en las
//! extensiones del request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Identidad del agente autenticado, disponible vía Extension
#[derive(Debug, Clone)]
pub struct AuthAgent {
    pub agent_id: Uuid,
    pub role: String,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let agent_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token con subject inválido".to_string()))?;

    request.extensions_mut().insert(AuthAgent {
        agent_id,
        role: claims.role,
    });

    Ok(next.run(request).await)
}
