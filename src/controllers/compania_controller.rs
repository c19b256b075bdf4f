//! Workflow de compañías
//!
//! Alta y renombre con trim; la unicidad del nombre la garantiza el
//! constraint de la tabla (el 23505 llega como Conflict).

use std::sync::Arc;

use sqlx::PgPool;

use crate::dto::compania_dto::{CreateCompaniaRequest, UpdateCompaniaRequest};
use crate::dto::ApiResponse;
use crate::models::compania::Compania;
use crate::repositories::{CompaniaRepository, CompaniaStore};
use crate::utils::errors::AppError;

pub struct CompaniaController<K> {
    companias: Arc<K>,
}

impl CompaniaController<CompaniaRepository> {
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(CompaniaRepository::new(pool)))
    }
}

impl<K: CompaniaStore> CompaniaController<K> {
    pub fn new(companias: Arc<K>) -> Self {
        Self { companias }
    }

    pub async fn listar(&self) -> Result<Vec<Compania>, AppError> {
        let companias = self.companias.listar().await?;
        tracing::info!("✅ {} compañías obtenidas", companias.len());
        Ok(companias)
    }

    pub async fn create(
        &self,
        request: CreateCompaniaRequest,
    ) -> Result<ApiResponse<Compania>, AppError> {
        let nombre = request.nombre.trim();
        if nombre.is_empty() {
            return Err(AppError::Validation(
                "El nombre de la compañía es obligatorio".to_string(),
            ));
        }

        let compania = self.companias.insertar(nombre).await?;
        tracing::info!("✅ Compañía creada: {}", compania.nombre);

        Ok(ApiResponse::success_with_message(
            compania,
            "Compañía creada exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCompaniaRequest,
    ) -> Result<ApiResponse<Compania>, AppError> {
        let nombre = request.nombre.trim();
        if nombre.is_empty() {
            return Err(AppError::Validation(
                "El nombre de la compañía es obligatorio".to_string(),
            ));
        }

        let compania = self.companias.actualizar(id, nombre).await?;
        tracing::info!("✅ Compañía {} actualizada", compania.id);

        Ok(ApiResponse::success_with_message(
            compania,
            "Compañía actualizada exitosamente".to_string(),
        ))
    }
}
