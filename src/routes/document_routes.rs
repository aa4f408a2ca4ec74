use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::common::ApiResponse;
use crate::dto::document_dto::{
    UpsertFitnessRequest, UpsertInsuranceRequest, UpsertPermitRequest, UpsertPucRequest,
    UpsertTaxRequest, VehicleDocumentsResponse,
};
use crate::models::document::{
    FitnessDetail, InsuranceDetail, PermitDetail, PucDetail, TaxDetail,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de documentos, anidadas bajo /api/vehicles
pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/:id/documents", get(get_documents))
        .route("/:id/documents/puc", put(upsert_puc))
        .route("/:id/documents/insurance", put(upsert_insurance))
        .route("/:id/documents/fitness", put(upsert_fitness))
        .route("/:id/documents/permit", put(upsert_permit))
        .route("/:id/documents/tax", put(upsert_tax))
}

async fn get_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleDocumentsResponse>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.get_documents(id).await?;
    Ok(Json(response))
}

async fn upsert_puc(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertPucRequest>,
) -> Result<Json<ApiResponse<PucDetail>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let detail = controller.upsert_puc(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        detail,
        "Certificado PUC registrado".to_string(),
    )))
}

async fn upsert_insurance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertInsuranceRequest>,
) -> Result<Json<ApiResponse<InsuranceDetail>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let detail = controller.upsert_insurance(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        detail,
        "Póliza de seguro registrada".to_string(),
    )))
}

async fn upsert_fitness(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertFitnessRequest>,
) -> Result<Json<ApiResponse<FitnessDetail>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let detail = controller.upsert_fitness(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        detail,
        "Certificado de aptitud registrado".to_string(),
    )))
}

async fn upsert_permit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertPermitRequest>,
) -> Result<Json<ApiResponse<PermitDetail>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let detail = controller.upsert_permit(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        detail,
        "Permiso registrado".to_string(),
    )))
}

async fn upsert_tax(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpsertTaxRequest>,
) -> Result<Json<ApiResponse<TaxDetail>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let detail = controller.upsert_tax(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        detail,
        "Impuesto de transporte registrado".to_string(),
    )))
}
