use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::poliza::PolizaConCompania;

/// Request para crear una póliza suelta
#[derive(Debug, Deserialize)]
pub struct CreatePolizaRequest {
    pub numero: String,
    pub compania_id: i64,
    pub cliente_id: i64,
    pub fecha_vigencia: Option<NaiveDate>,
}

/// Request de actualización parcial de una póliza
#[derive(Debug, Deserialize)]
pub struct UpdatePolizaRequest {
    pub numero: Option<String>,
    pub compania_id: Option<i64>,
    pub fecha_vigencia: Option<NaiveDate>,
}

/// Referencia mínima a una compañía dentro de respuestas anidadas
#[derive(Debug, Clone, Serialize)]
pub struct CompaniaRef {
    pub id: i64,
    pub nombre: String,
}

/// Response de póliza con su compañía anidada
#[derive(Debug, Serialize)]
pub struct PolizaResponse {
    pub id: i64,
    pub numero: String,
    pub cliente_id: i64,
    pub fecha_vigencia: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub compania: CompaniaRef,
}

impl From<PolizaConCompania> for PolizaResponse {
    fn from(p: PolizaConCompania) -> Self {
        Self {
            id: p.id,
            numero: p.numero,
            cliente_id: p.cliente_id,
            fecha_vigencia: p.fecha_vigencia,
            created_at: p.created_at,
            compania: CompaniaRef {
                id: p.compania_id,
                nombre: p.compania_nombre,
            },
        }
    }
}
