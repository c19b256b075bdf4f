//! Workflow de pólizas
//!
//! Las referencias a compañía y cliente se validan explícitamente antes de
//! insertar, porque el gateway no distingue violaciones de FK de otros
//! errores de forma útil para el usuario. Primero la compañía, después el
//! cliente; cualquiera de las dos que falte corta sin intentar el insert.

use std::sync::Arc;

use sqlx::PgPool;

use crate::dto::poliza_dto::{CreatePolizaRequest, PolizaResponse, UpdatePolizaRequest};
use crate::dto::ApiResponse;
use crate::repositories::{
    ClienteRepository, ClienteStore, CompaniaRepository, CompaniaStore, PolizaRepository,
    PolizaStore,
};
use crate::models::poliza::NuevaPoliza;
use crate::utils::errors::AppError;

pub struct PolizaController<P, C, K> {
    polizas: Arc<P>,
    clientes: Arc<C>,
    companias: Arc<K>,
}

impl PolizaController<PolizaRepository, ClienteRepository, CompaniaRepository> {
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PolizaRepository::new(pool.clone())),
            Arc::new(ClienteRepository::new(pool.clone())),
            Arc::new(CompaniaRepository::new(pool)),
        )
    }
}

impl<P, C, K> PolizaController<P, C, K>
where
    P: PolizaStore,
    C: ClienteStore,
    K: CompaniaStore,
{
    pub fn new(polizas: Arc<P>, clientes: Arc<C>, companias: Arc<K>) -> Self {
        Self {
            polizas,
            clientes,
            companias,
        }
    }

    pub async fn create(
        &self,
        request: CreatePolizaRequest,
    ) -> Result<ApiResponse<PolizaResponse>, AppError> {
        if !self.companias.existe(request.compania_id).await? {
            return Err(AppError::Validation(
                "La compañía seleccionada no existe".to_string(),
            ));
        }

        if !self.clientes.existe(request.cliente_id).await? {
            return Err(AppError::Validation("El cliente no existe".to_string()));
        }

        let poliza = self
            .polizas
            .insertar(NuevaPoliza {
                numero: request.numero,
                compania_id: request.compania_id,
                cliente_id: request.cliente_id,
                fecha_vigencia: request.fecha_vigencia,
            })
            .await?;

        tracing::info!("✅ Póliza {} creada", poliza.numero);

        Ok(ApiResponse::success_with_message(
            poliza.into(),
            "Póliza creada exitosamente".to_string(),
        ))
    }

    pub async fn listar_por_cliente(
        &self,
        cliente_id: i64,
    ) -> Result<Vec<PolizaResponse>, AppError> {
        let polizas = self.polizas.listar_por_cliente(cliente_id).await?;
        tracing::info!("✅ {} pólizas obtenidas", polizas.len());
        Ok(polizas.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdatePolizaRequest,
    ) -> Result<ApiResponse<PolizaResponse>, AppError> {
        // Una compañía nueva se valida antes de intentar el update
        if let Some(compania_id) = request.compania_id {
            if !self.companias.existe(compania_id).await? {
                return Err(AppError::Validation(
                    "La compañía seleccionada no existe".to_string(),
                ));
            }
        }

        let mut poliza = self
            .polizas
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Póliza no encontrada".to_string()))?;

        if let Some(numero) = request.numero {
            poliza.numero = numero;
        }
        if let Some(compania_id) = request.compania_id {
            poliza.compania_id = compania_id;
        }
        if let Some(fecha) = request.fecha_vigencia {
            poliza.fecha_vigencia = Some(fecha);
        }

        let actualizada = self.polizas.actualizar(&poliza).await?;
        tracing::info!("✅ Póliza {} actualizada", actualizada.id);

        Ok(ApiResponse::success_with_message(
            actualizada.into(),
            "Póliza actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.polizas.eliminar(id).await?;
        tracing::info!("🗑️ Póliza {} eliminada", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::*;
    use chrono::NaiveDate;

    fn controller(
        polizas: Arc<FakePolizaStore>,
        clientes: Arc<FakeClienteStore>,
        companias: Arc<FakeCompaniaStore>,
    ) -> PolizaController<FakePolizaStore, FakeClienteStore, FakeCompaniaStore> {
        PolizaController::new(polizas, clientes, companias)
    }

    fn request(compania_id: i64, cliente_id: i64) -> CreatePolizaRequest {
        CreatePolizaRequest {
            numero: "POL-1".to_string(),
            compania_id,
            cliente_id,
            fecha_vigencia: NaiveDate::from_ymd_opt(2025, 1, 1),
        }
    }

    #[tokio::test]
    async fn crear_con_compania_inexistente_corta_sin_insertar() {
        let polizas = Arc::new(FakePolizaStore::default());
        let clientes = Arc::new(FakeClienteStore::con_clientes(vec![cliente_de_prueba(
            1, "Pérez", "Juan",
        )]));
        let ctrl = controller(polizas.clone(), clientes.clone(), Arc::new(FakeCompaniaStore::default()));

        let resultado = ctrl.create(request(99, 1)).await;

        match resultado {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "La compañía seleccionada no existe")
            }
            otro => panic!("se esperaba error de validación, se obtuvo {:?}", otro.is_ok()),
        }
        assert!(polizas.llamadas.lock().unwrap().is_empty());
        // Se cortó antes de llegar a validar el cliente
        assert!(clientes.llamadas.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn crear_con_cliente_inexistente_corta_sin_insertar() {
        let polizas = Arc::new(FakePolizaStore::default());
        let ctrl = controller(
            polizas.clone(),
            Arc::new(FakeClienteStore::default()),
            Arc::new(FakeCompaniaStore::con_ids(&[1])),
        );

        let resultado = ctrl.create(request(1, 42)).await;

        match resultado {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "El cliente no existe"),
            otro => panic!("se esperaba error de validación, se obtuvo {:?}", otro.is_ok()),
        }
        assert!(polizas.llamadas.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn crear_con_referencias_validas_inserta() {
        let polizas = Arc::new(FakePolizaStore::default());
        let ctrl = controller(
            polizas.clone(),
            Arc::new(FakeClienteStore::con_clientes(vec![cliente_de_prueba(
                1, "Pérez", "Juan",
            )])),
            Arc::new(FakeCompaniaStore::con_ids(&[1])),
        );

        let respuesta = ctrl.create(request(1, 1)).await.unwrap();
        let poliza = respuesta.data.unwrap();

        assert_eq!(poliza.numero, "POL-1");
        assert_eq!(poliza.compania.id, 1);
        assert_eq!(*polizas.llamadas.lock().unwrap(), vec!["insertar".to_string()]);
    }

    #[tokio::test]
    async fn update_valida_la_nueva_compania_antes_de_escribir() {
        let polizas = Arc::new(FakePolizaStore::default());
        let ctrl = controller(
            polizas.clone(),
            Arc::new(FakeClienteStore::default()),
            Arc::new(FakeCompaniaStore::con_ids(&[1])),
        );

        let resultado = ctrl
            .update(
                1,
                UpdatePolizaRequest {
                    numero: None,
                    compania_id: Some(99),
                    fecha_vigencia: None,
                },
            )
            .await;

        assert!(matches!(resultado, Err(AppError::Validation(_))));
        assert!(polizas.llamadas.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_sin_compania_pasa_los_otros_campos() {
        let polizas = Arc::new(FakePolizaStore::default());
        let ctrl = controller(
            polizas.clone(),
            Arc::new(FakeClienteStore::con_clientes(vec![cliente_de_prueba(
                1, "Pérez", "Juan",
            )])),
            Arc::new(FakeCompaniaStore::con_ids(&[1])),
        );
        ctrl.create(request(1, 1)).await.unwrap();

        let respuesta = ctrl
            .update(
                1,
                UpdatePolizaRequest {
                    numero: Some("POL-NUEVA".to_string()),
                    compania_id: None,
                    fecha_vigencia: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(respuesta.data.unwrap().numero, "POL-NUEVA");
    }

    #[tokio::test]
    async fn delete_es_incondicional() {
        let polizas = Arc::new(FakePolizaStore::default());
        let ctrl = controller(
            polizas.clone(),
            Arc::new(FakeClienteStore::con_clientes(vec![cliente_de_prueba(
                1, "Pérez", "Juan",
            )])),
            Arc::new(FakeCompaniaStore::con_ids(&[1])),
        );
        ctrl.create(request(1, 1)).await.unwrap();

        ctrl.delete(1).await.unwrap();
        assert!(polizas.polizas.lock().unwrap().is_empty());
    }
}
