use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AgentResponse, AuthResponse, LoginRequest, RegisterAgentRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthAgent;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de autenticación
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Rutas de perfil (requieren token)
pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterAgentRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.register(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Agente registrado exitosamente".to_string(),
    )))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.login(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn me(
    State(state): State<AppState>,
    Extension(agent): Extension<AuthAgent>,
) -> Result<Json<AgentResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.me(agent.agent_id).await?;
    Ok(Json(response))
}
