//! Gateway de persistencia de clientes

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::cliente::{Cliente, NuevoCliente};
use crate::utils::errors::AppError;

/// Operaciones de persistencia sobre clientes. Los controllers reciben
/// una implementación inyectada en lugar de un cliente global.
#[async_trait]
pub trait ClienteStore: Send + Sync {
    async fn listar(&self) -> Result<Vec<Cliente>, AppError>;
    async fn buscar_por_id(&self, id: i64) -> Result<Option<Cliente>, AppError>;
    async fn existe(&self, id: i64) -> Result<bool, AppError>;
    async fn insertar(&self, datos: NuevoCliente) -> Result<Cliente, AppError>;
    async fn actualizar(&self, cliente: &Cliente) -> Result<Cliente, AppError>;
    async fn eliminar(&self, id: i64) -> Result<(), AppError>;
}

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteStore for ClienteRepository {
    async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY apellido ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "listar clientes"))
    }

    async fn buscar_por_id(&self, id: i64) -> Result<Option<Cliente>, AppError> {
        sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "buscar cliente"))
    }

    async fn existe(&self, id: i64) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clientes WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "verificar cliente"))?;

        Ok(result.0)
    }

    async fn insertar(&self, datos: NuevoCliente) -> Result<Cliente, AppError> {
        sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (apellido, nombre, telefono, email, localidad)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&datos.apellido)
        .bind(&datos.nombre)
        .bind(&datos.telefono)
        .bind(&datos.email)
        .bind(&datos.localidad)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "crear cliente"))
    }

    async fn actualizar(&self, cliente: &Cliente) -> Result<Cliente, AppError> {
        sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET apellido = $2, nombre = $3, telefono = $4, email = $5, localidad = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(cliente.id)
        .bind(&cliente.apellido)
        .bind(&cliente.nombre)
        .bind(&cliente.telefono)
        .bind(&cliente.email)
        .bind(&cliente.localidad)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "actualizar cliente"))
    }

    async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "eliminar cliente"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }
        Ok(())
    }
}
