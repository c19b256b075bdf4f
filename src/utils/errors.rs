//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BrokenReference(String),

    #[error("{0}")]
    SchemaMissing(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Clasificar un error de sqlx en una variante estructurada.
    ///
    /// Se usa el código SQLSTATE en lugar de buscar substrings en el mensaje:
    /// - 42P01 (undefined_table) / 42883 (undefined_function): la base no tiene
    ///   las tablas o funciones de GestorPólizas provisionadas.
    /// - 42501 (insufficient_privilege): políticas de acceso mal configuradas.
    /// - 23505 (unique_violation): duplicado, p. ej. nombre de compañía.
    /// - 23503 (foreign_key_violation): referencia rota.
    pub fn from_sqlx(err: sqlx::Error, contexto: &str) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                return AppError::NotFound(format!("{}: registro no encontrado", contexto));
            }
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "42P01" | "42883" => {
                            return AppError::SchemaMissing(
                                "Las tablas de la base de datos no existen. \
                                 Ejecutá los scripts de configuración."
                                    .to_string(),
                            );
                        }
                        "42501" => {
                            return AppError::PermissionDenied(
                                "Error de permisos. Verificá las políticas de acceso \
                                 de la base de datos."
                                    .to_string(),
                            );
                        }
                        "23505" => {
                            return AppError::Conflict(format!(
                                "{}: ya existe un registro con esos datos",
                                contexto
                            ));
                        }
                        "23503" => {
                            return AppError::BrokenReference(format!(
                                "{}: referencia a un registro inexistente",
                                contexto
                            ));
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        AppError::Database(format!("{}: {}", contexto, err))
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error", "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found", "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "Conflict", "CONFLICT"),
            AppError::BrokenReference(_) => (StatusCode::BAD_REQUEST, "Broken Reference", "BROKEN_REFERENCE"),
            AppError::SchemaMissing(_) => (StatusCode::SERVICE_UNAVAILABLE, "Schema Missing", "SCHEMA_MISSING"),
            AppError::PermissionDenied(_) => (StatusCode::FORBIDDEN, "Permission Denied", "PERMISSION_DENIED"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database Error", "DB_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", "INTERNAL_ERROR"),
        };

        // No filtrar detalles internos hacia el cliente
        let message = match &self {
            AppError::Database(detalle) => {
                tracing::error!("❌ Error de base de datos: {}", detalle);
                "Ocurrió un error al acceder a la base de datos".to_string()
            }
            AppError::Internal(detalle) => {
                tracing::error!("❌ Error interno: {}", detalle);
                "Error interno del servidor".to_string()
            }
            otro => otro.to_string(),
        };

        let body = ErrorResponse {
            success: false,
            error: error.to_string(),
            message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_se_clasifica_como_not_found() {
        let err = AppError::from_sqlx(sqlx::Error::RowNotFound, "cliente");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn errores_genericos_se_clasifican_como_database() {
        let err = AppError::from_sqlx(sqlx::Error::PoolTimedOut, "clientes");
        assert!(matches!(err, AppError::Database(_)));
    }
}
