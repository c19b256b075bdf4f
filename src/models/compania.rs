//! Modelo de Compañía
//!
//! Mapea exactamente al schema PostgreSQL de la tabla `companias`.
//! El nombre tiene constraint UNIQUE a nivel de base de datos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Compañía aseguradora - mapea exactamente a la tabla companias
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Compania {
    pub id: i64,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
}
