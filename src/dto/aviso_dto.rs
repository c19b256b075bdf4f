use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::poliza_dto::CompaniaRef;
use crate::models::aviso::EstadoAviso;

/// Request para cambiar el estado de un aviso. Serde garantiza que solo
/// entren los tres valores de `EstadoAviso`.
#[derive(Debug, Deserialize)]
pub struct CambiarEstadoRequest {
    pub estado: EstadoAviso,
}

/// Referencia mínima a un cliente dentro de respuestas anidadas
#[derive(Debug, Clone, Serialize)]
pub struct ClienteRef {
    pub id: i64,
    pub apellido: String,
    pub nombre: String,
}

/// Póliza tal como se anida dentro de un aviso
#[derive(Debug, Serialize)]
pub struct PolizaAvisoResponse {
    pub id: i64,
    pub numero: String,
    pub fecha_vencimiento: Option<NaiveDate>,
    pub cliente: ClienteRef,
    pub compania: CompaniaRef,
}

/// Aviso reconstruido en estructura anidada para presentación
#[derive(Debug, Serialize)]
pub struct AvisoResponse {
    pub id: i64,
    pub estado: EstadoAviso,
    pub fecha_vencimiento_calculado: Option<NaiveDate>,
    pub ultimo_pago: Option<DateTime<Utc>>,
    pub dias_restantes: i32,
    pub poliza: PolizaAvisoResponse,
}
