//! Modelo de Póliza
//!
//! Una póliza pertenece a exactamente un cliente y referencia exactamente
//! una compañía. El número es texto libre, sin validación de unicidad.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Póliza - mapea exactamente a la tabla polizas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Poliza {
    pub id: i64,
    pub numero: String,
    pub compania_id: i64,
    pub cliente_id: i64,
    pub fecha_vigencia: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Póliza con la compañía ya joineada, como la devuelven las lecturas
#[derive(Debug, Clone, FromRow)]
pub struct PolizaConCompania {
    pub id: i64,
    pub numero: String,
    pub compania_id: i64,
    pub cliente_id: i64,
    pub fecha_vigencia: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub compania_nombre: String,
}

/// Datos ya validados para insertar una póliza
#[derive(Debug, Clone)]
pub struct NuevaPoliza {
    pub numero: String,
    pub compania_id: i64,
    pub cliente_id: i64,
    pub fecha_vigencia: Option<NaiveDate>,
}
