//! Gateway de persistencia de compañías

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::compania::Compania;
use crate::utils::errors::AppError;

#[async_trait]
pub trait CompaniaStore: Send + Sync {
    async fn listar(&self) -> Result<Vec<Compania>, AppError>;
    async fn existe(&self, id: i64) -> Result<bool, AppError>;
    async fn insertar(&self, nombre: &str) -> Result<Compania, AppError>;
    async fn actualizar(&self, id: i64, nombre: &str) -> Result<Compania, AppError>;
}

pub struct CompaniaRepository {
    pool: PgPool,
}

impl CompaniaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompaniaStore for CompaniaRepository {
    async fn listar(&self) -> Result<Vec<Compania>, AppError> {
        sqlx::query_as::<_, Compania>("SELECT * FROM companias ORDER BY nombre ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "listar compañías"))
    }

    async fn existe(&self, id: i64) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM companias WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::from_sqlx(e, "verificar compañía"))?;

        Ok(result.0)
    }

    async fn insertar(&self, nombre: &str) -> Result<Compania, AppError> {
        // El constraint UNIQUE de la tabla rechaza duplicados (23505 -> Conflict)
        sqlx::query_as::<_, Compania>(
            "INSERT INTO companias (nombre) VALUES ($1) RETURNING *",
        )
        .bind(nombre)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "crear compañía"))
    }

    async fn actualizar(&self, id: i64, nombre: &str) -> Result<Compania, AppError> {
        sqlx::query_as::<_, Compania>(
            "UPDATE companias SET nombre = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(nombre)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "actualizar compañía"))
    }
}
