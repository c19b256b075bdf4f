//! Modelo de Cliente
//!
//! Mapea exactamente al schema PostgreSQL de la tabla `clientes`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cliente principal - mapea exactamente a la tabla clientes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    pub id: i64,
    pub apellido: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub localidad: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Datos ya validados y normalizados para insertar un cliente
#[derive(Debug, Clone)]
pub struct NuevoCliente {
    pub apellido: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub localidad: Option<String>,
}
