use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::aviso_controller::AvisoController;
use crate::dto::aviso_dto::{AvisoResponse, CambiarEstadoRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_aviso_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_avisos))
        .route("/refrescar", post(refrescar_avisos))
        .route("/:id/estado", put(cambiar_estado))
}

/// Lectura pura de la vista de avisos; no regenera nada.
async fn list_avisos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AvisoResponse>>>, AppError> {
    let controller = AvisoController::with_pool(state.pool.clone());
    let avisos = controller.listar().await?;
    Ok(Json(ApiResponse::success(avisos)))
}

/// Regeneración explícita de avisos (antes era un efecto oculto del GET).
async fn refrescar_avisos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AvisoController::with_pool(state.pool.clone());
    controller.refrescar().await?;
    Ok(Json(ApiResponse::ok("Avisos actualizados".to_string())))
}

async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CambiarEstadoRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AvisoController::with_pool(state.pool.clone());
    controller.cambiar_estado(id, request.estado).await?;
    Ok(Json(ApiResponse::ok("Estado actualizado".to_string())))
}
