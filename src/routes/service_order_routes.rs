use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_order_controller::ServiceOrderController;
use crate::dto::common::ApiResponse;
use crate::dto::service_order_dto::{OrderFilters, ServiceOrderResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id/pay", post(pay_order))
}

async fn list_orders(
    State(state): State<AppState>,
    Query(filters): Query<OrderFilters>,
) -> Result<Json<Vec<ServiceOrderResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceOrderResponse>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn pay_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ServiceOrderResponse>>, AppError> {
    let controller = ServiceOrderController::new(state.pool.clone());
    let response = controller.pay(id).await?;
    Ok(Json(response))
}
