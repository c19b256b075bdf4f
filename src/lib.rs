//! GestorPólizas - backend de gestión de pólizas de seguros
//!
//! API HTTP para que un productor de seguros administre clientes,
//! compañías, pólizas y avisos de renovación. La generación automática de
//! avisos vive en la base de datos (triggers + funciones); acá solo se
//! leen y se transicionan.

pub mod config;
pub mod controllers;
pub mod data;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use state::AppState;

/// Armar el router completo de la aplicación.
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_development() || state.config.cors_origins.is_empty() {
        middleware::cors::cors_middleware()
    } else {
        middleware::cors::cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/salud", get(salud))
        .nest("/api/clientes", routes::cliente_routes::create_cliente_router())
        .nest("/api/companias", routes::compania_routes::create_compania_router())
        .nest("/api/polizas", routes::poliza_routes::create_poliza_router())
        .nest("/api/avisos", routes::aviso_routes::create_aviso_router())
        .nest("/api/localidades", routes::localidad_routes::create_localidad_router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud
async fn salud() -> Json<serde_json::Value> {
    Json(json!({
        "service": "gestor-polizas",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
