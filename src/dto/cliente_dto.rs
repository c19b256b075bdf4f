use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::poliza_dto::PolizaResponse;
use crate::models::cliente::Cliente;

/// Request para crear un cliente, opcionalmente con pólizas anidadas
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClienteRequest {
    pub apellido: String,
    pub nombre: String,
    pub telefono: Option<String>,

    #[validate(email(message = "El email no tiene un formato válido"))]
    pub email: Option<String>,

    pub localidad: Option<String>,

    #[serde(default)]
    pub polizas: Vec<PolizaAnidadaRequest>,
}

/// Especificación de póliza dentro del alta de cliente
#[derive(Debug, Clone, Deserialize)]
pub struct PolizaAnidadaRequest {
    pub numero: String,
    pub compania_id: i64,
    pub fecha_vigencia: Option<NaiveDate>,
}

/// Request de actualización parcial: los campos ausentes no se tocan.
/// Un email presente pero en blanco se interpreta como "borrar el email".
#[derive(Debug, Deserialize)]
pub struct UpdateClienteRequest {
    pub apellido: Option<String>,
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub localidad: Option<String>,
}

/// Detalle de cliente con sus pólizas (cada una con su compañía)
#[derive(Debug, Serialize)]
pub struct ClienteDetalleResponse {
    #[serde(flatten)]
    pub cliente: Cliente,
    pub polizas: Vec<PolizaResponse>,
}
