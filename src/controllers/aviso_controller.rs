//! Workflow de avisos de renovación
//!
//! Máquina de tres estados: por_vencer, avisado, pagado. La única
//! transición privilegiada es la entrada a "pagado", que va por la función
//! de base `marcar_pago_poliza`; cualquier otro destino (incluidos los
//! "deshacer" de la UI) es una escritura simple de estado. La salida de
//! "pagado" NO revierte lo que esa función haya hecho.

use std::sync::Arc;

use sqlx::PgPool;

use crate::dto::aviso_dto::{AvisoResponse, ClienteRef, PolizaAvisoResponse};
use crate::dto::poliza_dto::CompaniaRef;
use crate::models::aviso::{AvisoProximo, EstadoAviso};
use crate::repositories::{AvisoRepository, AvisoStore};
use crate::utils::errors::AppError;

pub struct AvisoController<A> {
    avisos: Arc<A>,
}

impl AvisoController<AvisoRepository> {
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(AvisoRepository::new(pool)))
    }
}

impl<A: AvisoStore> AvisoController<A> {
    pub fn new(avisos: Arc<A>) -> Self {
        Self { avisos }
    }

    /// Lectura pura: no regenera avisos. Para eso está `refrescar`.
    pub async fn listar(&self) -> Result<Vec<AvisoResponse>, AppError> {
        let filas = self.avisos.listar_proximos().await?;
        tracing::info!("✅ {} avisos obtenidos", filas.len());

        filas.into_iter().map(armar_respuesta).collect()
    }

    /// Invoca la regeneración de avisos vencidos en la base.
    pub async fn refrescar(&self) -> Result<(), AppError> {
        self.avisos.refrescar().await?;
        tracing::info!("🔄 Avisos regenerados");
        Ok(())
    }

    pub async fn cambiar_estado(
        &self,
        aviso_id: i64,
        estado: EstadoAviso,
    ) -> Result<(), AppError> {
        match estado {
            EstadoAviso::Pagado => {
                tracing::info!("💰 Marcando pago del aviso {}", aviso_id);
                self.avisos.marcar_pago(aviso_id).await
            }
            otro => {
                tracing::info!("🔄 Aviso {} pasa a {}", aviso_id, otro);
                self.avisos.actualizar_estado(aviso_id, otro).await
            }
        }
    }
}

/// Rearmar la fila aplanada de la vista en la estructura anidada
/// aviso -> póliza -> {cliente, compañía} que consume la presentación.
fn armar_respuesta(fila: AvisoProximo) -> Result<AvisoResponse, AppError> {
    let estado: EstadoAviso = fila
        .estado
        .parse()
        .map_err(|e: String| AppError::Internal(e))?;

    Ok(AvisoResponse {
        id: fila.id,
        estado,
        fecha_vencimiento_calculado: fila.fecha_vencimiento_calculado,
        ultimo_pago: fila.ultimo_pago,
        dias_restantes: fila.dias_restantes,
        poliza: PolizaAvisoResponse {
            id: fila.poliza_id,
            numero: fila.poliza_numero,
            fecha_vencimiento: fila.fecha_vencimiento_calculado,
            cliente: ClienteRef {
                id: fila.cliente_id,
                apellido: fila.apellido,
                nombre: fila.nombre,
            },
            compania: CompaniaRef {
                id: fila.compania_id,
                nombre: fila.compania_nombre,
            },
        },
    })
}
