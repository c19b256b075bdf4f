use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::poliza_controller::PolizaController;
use crate::dto::poliza_dto::{CreatePolizaRequest, PolizaResponse, UpdatePolizaRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_poliza_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_poliza))
        .route("/cliente/:cliente_id", get(list_polizas_por_cliente))
        .route("/:id", put(update_poliza))
        .route("/:id", delete(delete_poliza))
}

async fn create_poliza(
    State(state): State<AppState>,
    Json(request): Json<CreatePolizaRequest>,
) -> Result<Json<ApiResponse<PolizaResponse>>, AppError> {
    let controller = PolizaController::with_pool(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_polizas_por_cliente(
    State(state): State<AppState>,
    Path(cliente_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<PolizaResponse>>>, AppError> {
    let controller = PolizaController::with_pool(state.pool.clone());
    let polizas = controller.listar_por_cliente(cliente_id).await?;
    Ok(Json(ApiResponse::success(polizas)))
}

async fn update_poliza(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePolizaRequest>,
) -> Result<Json<ApiResponse<PolizaResponse>>, AppError> {
    let controller = PolizaController::with_pool(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_poliza(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = PolizaController::with_pool(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::ok(
        "Póliza eliminada exitosamente".to_string(),
    )))
}
