//! Gateway de persistencia de pólizas
//!
//! Las lecturas devuelven la póliza con su compañía ya joineada, que es
//! la forma que consume la presentación.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::poliza::{NuevaPoliza, Poliza, PolizaConCompania};
use crate::utils::errors::AppError;

#[async_trait]
pub trait PolizaStore: Send + Sync {
    async fn insertar(&self, datos: NuevaPoliza) -> Result<PolizaConCompania, AppError>;
    async fn listar_por_cliente(&self, cliente_id: i64) -> Result<Vec<PolizaConCompania>, AppError>;
    async fn buscar_por_id(&self, id: i64) -> Result<Option<Poliza>, AppError>;
    async fn actualizar(&self, poliza: &Poliza) -> Result<PolizaConCompania, AppError>;
    async fn eliminar(&self, id: i64) -> Result<(), AppError>;
    /// Borra todas las pólizas de un cliente; devuelve cuántas borró.
    async fn eliminar_por_cliente(&self, cliente_id: i64) -> Result<u64, AppError>;
}

pub struct PolizaRepository {
    pool: PgPool,
}

impl PolizaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PolizaStore for PolizaRepository {
    async fn insertar(&self, datos: NuevaPoliza) -> Result<PolizaConCompania, AppError> {
        sqlx::query_as::<_, PolizaConCompania>(
            r#"
            WITH insertada AS (
                INSERT INTO polizas (numero, compania_id, cliente_id, fecha_vigencia)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT i.id, i.numero, i.compania_id, i.cliente_id, i.fecha_vigencia,
                   i.created_at, c.nombre AS compania_nombre
            FROM insertada i
            JOIN companias c ON c.id = i.compania_id
            "#,
        )
        .bind(&datos.numero)
        .bind(datos.compania_id)
        .bind(datos.cliente_id)
        .bind(datos.fecha_vigencia)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "crear póliza"))
    }

    async fn listar_por_cliente(&self, cliente_id: i64) -> Result<Vec<PolizaConCompania>, AppError> {
        sqlx::query_as::<_, PolizaConCompania>(
            r#"
            SELECT p.id, p.numero, p.compania_id, p.cliente_id, p.fecha_vigencia,
                   p.created_at, c.nombre AS compania_nombre
            FROM polizas p
            JOIN companias c ON c.id = p.compania_id
            WHERE p.cliente_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "listar pólizas"))
    }

    async fn buscar_por_id(&self, id: i64) -> Result<Option<Poliza>, AppError> {
        sqlx::query_as::<_, Poliza>("SELECT * FROM polizas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "buscar póliza"))
    }

    async fn actualizar(&self, poliza: &Poliza) -> Result<PolizaConCompania, AppError> {
        sqlx::query_as::<_, PolizaConCompania>(
            r#"
            WITH actualizada AS (
                UPDATE polizas
                SET numero = $2, compania_id = $3, fecha_vigencia = $4
                WHERE id = $1
                RETURNING *
            )
            SELECT a.id, a.numero, a.compania_id, a.cliente_id, a.fecha_vigencia,
                   a.created_at, c.nombre AS compania_nombre
            FROM actualizada a
            JOIN companias c ON c.id = a.compania_id
            "#,
        )
        .bind(poliza.id)
        .bind(&poliza.numero)
        .bind(poliza.compania_id)
        .bind(poliza.fecha_vigencia)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "actualizar póliza"))
    }

    async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM polizas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "eliminar póliza"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Póliza no encontrada".to_string()));
        }
        Ok(())
    }

    async fn eliminar_por_cliente(&self, cliente_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM polizas WHERE cliente_id = $1")
            .bind(cliente_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "eliminar pólizas del cliente"))?;

        Ok(result.rows_affected())
    }
}
