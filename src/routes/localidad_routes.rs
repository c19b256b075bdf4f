use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;

use crate::data::localidades;
use crate::dto::ApiResponse;
use crate::state::AppState;

pub fn create_localidad_router() -> Router<AppState> {
    Router::new().route("/", get(list_localidades))
}

#[derive(Debug, Deserialize)]
struct LocalidadQuery {
    q: Option<String>,
}

/// Filtro sobre la lista fija de localidades, sin tocar la base.
async fn list_localidades(Query(query): Query<LocalidadQuery>) -> Json<ApiResponse<Vec<String>>> {
    let termino = query.q.unwrap_or_default();
    let localidades = localidades::filtrar(&termino)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(ApiResponse::success(localidades))
}
