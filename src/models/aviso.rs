//! Modelo de Aviso de renovación
//!
//! Los avisos los genera la base de datos (triggers + función
//! `actualizar_avisos_automaticos`); este código nunca los crea ni los
//! borra, solo los lee por la vista `avisos_proximos` y les cambia el estado.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Estados posibles de un aviso. El estado inicial (`por_vencer`) lo asigna
/// el trigger de la base, nunca este código.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoAviso {
    PorVencer,
    Avisado,
    Pagado,
}

impl EstadoAviso {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoAviso::PorVencer => "por_vencer",
            EstadoAviso::Avisado => "avisado",
            EstadoAviso::Pagado => "pagado",
        }
    }
}

impl fmt::Display for EstadoAviso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstadoAviso {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "por_vencer" => Ok(EstadoAviso::PorVencer),
            "avisado" => Ok(EstadoAviso::Avisado),
            "pagado" => Ok(EstadoAviso::Pagado),
            otro => Err(format!("estado de aviso desconocido: {}", otro)),
        }
    }
}

/// Fila de la vista `avisos_proximos`: aviso + póliza + cliente + compañía
/// aplanados, ordenados por días restantes.
#[derive(Debug, Clone, FromRow)]
pub struct AvisoProximo {
    pub id: i64,
    pub estado: String,
    pub fecha_vencimiento_calculado: Option<NaiveDate>,
    pub ultimo_pago: Option<DateTime<Utc>>,
    pub dias_restantes: i32,
    pub poliza_id: i64,
    pub poliza_numero: String,
    pub cliente_id: i64,
    pub apellido: String,
    pub nombre: String,
    pub compania_id: i64,
    pub compania_nombre: String,
}
