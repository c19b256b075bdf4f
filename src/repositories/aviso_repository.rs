//! Gateway de persistencia de avisos
//!
//! Los avisos se leen por la vista `avisos_proximos` y se regeneran con la
//! función `actualizar_avisos_automaticos()` de la base. El paso a "pagado"
//! va por la función privilegiada `marcar_pago_poliza(aviso_id)`, que además
//! estampa el pago y ajusta la vigencia de la póliza del lado de la base.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::aviso::{AvisoProximo, EstadoAviso};
use crate::utils::errors::AppError;

#[async_trait]
pub trait AvisoStore: Send + Sync {
    /// Regenera los avisos vencidos (antes era un efecto implícito de la
    /// lectura; ahora es una operación explícita).
    async fn refrescar(&self) -> Result<(), AppError>;

    /// Lectura pura de la vista, ordenada por días restantes ascendente.
    async fn listar_proximos(&self) -> Result<Vec<AvisoProximo>, AppError>;

    /// Escritura simple de estado (por_vencer / avisado).
    async fn actualizar_estado(&self, aviso_id: i64, estado: EstadoAviso) -> Result<(), AppError>;

    /// Camino privilegiado: solo para la transición a pagado.
    async fn marcar_pago(&self, aviso_id: i64) -> Result<(), AppError>;
}

pub struct AvisoRepository {
    pool: PgPool,
}

impl AvisoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvisoStore for AvisoRepository {
    async fn refrescar(&self) -> Result<(), AppError> {
        sqlx::query("SELECT actualizar_avisos_automaticos()")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "refrescar avisos"))?;
        Ok(())
    }

    async fn listar_proximos(&self) -> Result<Vec<AvisoProximo>, AppError> {
        sqlx::query_as::<_, AvisoProximo>(
            "SELECT * FROM avisos_proximos ORDER BY dias_restantes ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "listar avisos"))
    }

    async fn actualizar_estado(&self, aviso_id: i64, estado: EstadoAviso) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE avisos SET estado = $2 WHERE id = $1")
            .bind(aviso_id)
            .bind(estado.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "actualizar aviso"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Aviso no encontrado".to_string()));
        }
        Ok(())
    }

    async fn marcar_pago(&self, aviso_id: i64) -> Result<(), AppError> {
        sqlx::query("SELECT marcar_pago_poliza($1)")
            .bind(aviso_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "marcar pago"))?;
        Ok(())
    }
}
