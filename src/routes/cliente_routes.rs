use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{ClienteDetalleResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::dto::ApiResponse;
use crate::models::cliente::Cliente;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clientes))
        .route("/", post(create_cliente))
        .route("/:id", get(get_cliente))
        .route("/:id", put(update_cliente))
        .route("/:id", delete(delete_cliente))
}

#[derive(Debug, Deserialize)]
struct ListarClientesQuery {
    buscar: Option<String>,
}

async fn list_clientes(
    State(state): State<AppState>,
    Query(query): Query<ListarClientesQuery>,
) -> Result<Json<ApiResponse<Vec<Cliente>>>, AppError> {
    let controller = ClienteController::with_pool(state.pool.clone());
    let clientes = controller.listar(query.buscar.as_deref()).await?;
    Ok(Json(ApiResponse::success(clientes)))
}

async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ClienteDetalleResponse>>, AppError> {
    let controller = ClienteController::with_pool(state.pool.clone());
    let detalle = controller.detalle(id).await?;
    Ok(Json(ApiResponse::success(detalle)))
}

async fn create_cliente(
    State(state): State<AppState>,
    Json(request): Json<CreateClienteRequest>,
) -> Result<Json<ApiResponse<Cliente>>, AppError> {
    let controller = ClienteController::with_pool(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateClienteRequest>,
) -> Result<Json<ApiResponse<Cliente>>, AppError> {
    let controller = ClienteController::with_pool(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ClienteController::with_pool(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::ok(
        "Cliente eliminado exitosamente".to_string(),
    )))
}
