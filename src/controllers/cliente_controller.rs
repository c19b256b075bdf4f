//! Workflow de clientes
//!
//! Alta con pólizas anidadas, actualización parcial y baja en cascada.
//! La baja borra primero las pólizas y recién después el cliente: si el
//! primer paso falla, el cliente queda intacto y nunca quedan pólizas
//! huérfanas apuntando a un cliente borrado.

use std::sync::Arc;

use sqlx::PgPool;
use validator::Validate;

use crate::dto::cliente_dto::{ClienteDetalleResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::dto::ApiResponse;
use crate::models::cliente::{Cliente, NuevoCliente};
use crate::models::poliza::NuevaPoliza;
use crate::repositories::{
    ClienteRepository, ClienteStore, CompaniaRepository, CompaniaStore, PolizaRepository,
    PolizaStore,
};
use crate::utils::busqueda::buscar_sin_acentos;
use crate::utils::errors::AppError;
use crate::utils::validation::normalizar_opcional;

pub struct ClienteController<C, P, K> {
    clientes: Arc<C>,
    polizas: Arc<P>,
    companias: Arc<K>,
}

impl ClienteController<ClienteRepository, PolizaRepository, CompaniaRepository> {
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(ClienteRepository::new(pool.clone())),
            Arc::new(PolizaRepository::new(pool.clone())),
            Arc::new(CompaniaRepository::new(pool)),
        )
    }
}

impl<C, P, K> ClienteController<C, P, K>
where
    C: ClienteStore,
    P: PolizaStore,
    K: CompaniaStore,
{
    pub fn new(clientes: Arc<C>, polizas: Arc<P>, companias: Arc<K>) -> Self {
        Self {
            clientes,
            polizas,
            companias,
        }
    }

    /// Listar clientes, opcionalmente filtrados por "apellido nombre"
    /// ignorando acentos y mayúsculas.
    pub async fn listar(&self, buscar: Option<&str>) -> Result<Vec<Cliente>, AppError> {
        let clientes = self.clientes.listar().await?;

        let filtrados = match buscar {
            Some(termino) if !termino.trim().is_empty() => clientes
                .into_iter()
                .filter(|c| {
                    buscar_sin_acentos(termino, &format!("{} {}", c.apellido, c.nombre))
                })
                .collect(),
            _ => clientes,
        };

        tracing::info!("✅ {} clientes obtenidos", filtrados.len());
        Ok(filtrados)
    }

    /// Cliente con sus pólizas, cada una con su compañía.
    pub async fn detalle(&self, id: i64) -> Result<ClienteDetalleResponse, AppError> {
        let cliente = self
            .clientes
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let polizas = self.polizas.listar_por_cliente(id).await?;

        Ok(ClienteDetalleResponse {
            cliente,
            polizas: polizas.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn create(
        &self,
        mut request: CreateClienteRequest,
    ) -> Result<ApiResponse<Cliente>, AppError> {
        // Validar campos obligatorios antes de tocar la base
        if request.apellido.trim().is_empty() || request.nombre.trim().is_empty() {
            return Err(AppError::Validation(
                "El apellido y nombre son obligatorios".to_string(),
            ));
        }

        // Campos opcionales en blanco se guardan como NULL
        request.telefono = normalizar_opcional(request.telefono);
        request.email = normalizar_opcional(request.email);
        request.localidad = normalizar_opcional(request.localidad);

        request
            .validate()
            .map_err(|e| AppError::Validation(format!("Datos inválidos: {}", e)))?;

        let datos = NuevoCliente {
            apellido: request.apellido.trim().to_string(),
            nombre: request.nombre.trim().to_string(),
            telefono: request.telefono.clone(),
            email: request.email.clone(),
            localidad: request.localidad.clone(),
        };

        let cliente = self.clientes.insertar(datos).await?;
        tracing::info!("✅ Cliente creado: {} {}", cliente.apellido, cliente.nombre);

        // Pólizas anidadas: una compañía inexistente o un insert fallido
        // saltea esa póliza sin abortar el alta del cliente. No hay
        // transacción que abarque la secuencia.
        for (i, poliza) in request.polizas.iter().enumerate() {
            match self.companias.existe(poliza.compania_id).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(
                        "⚠️ Póliza {}/{}: compañía {} inexistente, se saltea",
                        i + 1,
                        request.polizas.len(),
                        poliza.compania_id
                    );
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Póliza {}/{}: no se pudo validar la compañía ({}), se saltea",
                        i + 1,
                        request.polizas.len(),
                        e
                    );
                    continue;
                }
            }

            let nueva = NuevaPoliza {
                numero: poliza.numero.clone(),
                compania_id: poliza.compania_id,
                cliente_id: cliente.id,
                fecha_vigencia: poliza.fecha_vigencia,
            };

            if let Err(e) = self.polizas.insertar(nueva).await {
                tracing::warn!(
                    "⚠️ Póliza {}/{}: error al insertar ({}), se saltea",
                    i + 1,
                    request.polizas.len(),
                    e
                );
            }
        }

        Ok(ApiResponse::success_with_message(
            cliente,
            "Cliente creado exitosamente".to_string(),
        ))
    }

    /// Actualización parcial: solo cambian los campos provistos; un email
    /// provisto en blanco se coerciona a NULL.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateClienteRequest,
    ) -> Result<ApiResponse<Cliente>, AppError> {
        let mut cliente = self
            .clientes
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        if let Some(apellido) = request.apellido {
            cliente.apellido = apellido;
        }
        if let Some(nombre) = request.nombre {
            cliente.nombre = nombre;
        }
        if let Some(telefono) = request.telefono {
            cliente.telefono = Some(telefono);
        }
        if let Some(email) = request.email {
            // Email provisto en blanco -> NULL
            cliente.email = normalizar_opcional(Some(email));
        }
        if let Some(localidad) = request.localidad {
            cliente.localidad = Some(localidad);
        }

        let actualizado = self.clientes.actualizar(&cliente).await?;
        tracing::info!("✅ Cliente {} actualizado", actualizado.id);

        Ok(ApiResponse::success_with_message(
            actualizado,
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    /// Baja en cascada: pólizas primero, cliente después.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let borradas = self.polizas.eliminar_por_cliente(id).await?;
        tracing::info!("🗑️ {} pólizas del cliente {} eliminadas", borradas, id);

        self.clientes.eliminar(id).await?;
        tracing::info!("🗑️ Cliente {} eliminado", id);
        Ok(())
    }
}
