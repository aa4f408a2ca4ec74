use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::renewal_controller::RenewalController;
use crate::dto::common::ApiResponse;
use crate::dto::renewal_dto::{
    AutoCheckData, DuesFilters, ProcessDueRequest, RenewalCheckData, RenewalDueResponse,
};
use crate::dto::service_order_dto::ServiceOrderResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_renewal_router() -> Router<AppState> {
    Router::new()
        .route("/check-dues", post(check_dues))
        .route("/auto-check", post(auto_check))
        .route("/dues", get(list_dues))
        .route("/dues/:id/process", post(process_due))
}

async fn check_dues(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RenewalCheckData>>, AppError> {
    let controller = RenewalController::new(state.pool.clone());
    let response = controller.check_dues().await?;
    Ok(Json(response))
}

/// Nunca responde error: los fallos internos viajan como warning
async fn auto_check(State(state): State<AppState>) -> Json<ApiResponse<AutoCheckData>> {
    let controller = RenewalController::new(state.pool.clone());
    Json(controller.auto_check().await)
}

async fn list_dues(
    State(state): State<AppState>,
    Query(filters): Query<DuesFilters>,
) -> Result<Json<Vec<RenewalDueResponse>>, AppError> {
    let controller = RenewalController::new(state.pool.clone());
    let response = controller.list_dues(filters).await?;
    Ok(Json(response))
}

async fn process_due(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProcessDueRequest>,
) -> Result<Json<ApiResponse<ServiceOrderResponse>>, AppError> {
    let controller = RenewalController::new(state.pool.clone());
    let response = controller.process_due(id, request).await?;
    Ok(Json(response))
}
