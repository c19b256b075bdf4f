use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::compania_controller::CompaniaController;
use crate::dto::compania_dto::{CreateCompaniaRequest, UpdateCompaniaRequest};
use crate::dto::ApiResponse;
use crate::models::compania::Compania;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_compania_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companias))
        .route("/", post(create_compania))
        .route("/:id", put(update_compania))
}

async fn list_companias(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Compania>>>, AppError> {
    let controller = CompaniaController::with_pool(state.pool.clone());
    let companias = controller.listar().await?;
    Ok(Json(ApiResponse::success(companias)))
}

async fn create_compania(
    State(state): State<AppState>,
    Json(request): Json<CreateCompaniaRequest>,
) -> Result<Json<ApiResponse<Compania>>, AppError> {
    let controller = CompaniaController::with_pool(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_compania(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCompaniaRequest>,
) -> Result<Json<ApiResponse<Compania>>, AppError> {
    let controller = CompaniaController::with_pool(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
