//! Fakes en memoria de los gateways, para testear los workflows sin base.
//!
//! Cada fake registra en `llamadas` qué método se invocó, así los tests
//! pueden afirmar no solo el resultado sino qué camino de persistencia
//! se tomó (o que no se tomó ninguno).

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use crate::models::aviso::{AvisoProximo, EstadoAviso};
use crate::models::cliente::{Cliente, NuevoCliente};
use crate::models::compania::Compania;
use crate::models::poliza::{NuevaPoliza, Poliza, PolizaConCompania};
use crate::repositories::{AvisoStore, ClienteStore, CompaniaStore, PolizaStore};
use crate::utils::errors::AppError;

pub fn cliente_de_prueba(id: i64, apellido: &str, nombre: &str) -> Cliente {
    Cliente {
        id,
        apellido: apellido.to_string(),
        nombre: nombre.to_string(),
        telefono: None,
        email: None,
        localidad: None,
        created_at: Utc::now(),
    }
}

pub fn aviso_de_prueba(id: i64, estado: &str, dias_restantes: i32) -> AvisoProximo {
    AvisoProximo {
        id,
        estado: estado.to_string(),
        fecha_vencimiento_calculado: None,
        ultimo_pago: None,
        dias_restantes,
        poliza_id: id * 10,
        poliza_numero: format!("POL-{}", id),
        cliente_id: 1,
        apellido: "Pérez".to_string(),
        nombre: "Juan".to_string(),
        compania_id: 1,
        compania_nombre: "La Segunda".to_string(),
    }
}

#[derive(Default)]
pub struct FakeClienteStore {
    pub clientes: Mutex<Vec<Cliente>>,
    pub llamadas: Mutex<Vec<String>>,
    pub fallar_eliminar: bool,
}

impl FakeClienteStore {
    pub fn con_clientes(clientes: Vec<Cliente>) -> Self {
        Self {
            clientes: Mutex::new(clientes),
            ..Default::default()
        }
    }

    fn registrar(&self, llamada: &str) {
        self.llamadas.lock().unwrap().push(llamada.to_string());
    }
}

#[async_trait]
impl ClienteStore for FakeClienteStore {
    async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        self.registrar("listar");
        Ok(self.clientes.lock().unwrap().clone())
    }

    async fn buscar_por_id(&self, id: i64) -> Result<Option<Cliente>, AppError> {
        self.registrar("buscar_por_id");
        Ok(self.clientes.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn existe(&self, id: i64) -> Result<bool, AppError> {
        self.registrar("existe");
        Ok(self.clientes.lock().unwrap().iter().any(|c| c.id == id))
    }

    async fn insertar(&self, datos: NuevoCliente) -> Result<Cliente, AppError> {
        self.registrar("insertar");
        let mut clientes = self.clientes.lock().unwrap();
        let cliente = Cliente {
            id: clientes.len() as i64 + 1,
            apellido: datos.apellido,
            nombre: datos.nombre,
            telefono: datos.telefono,
            email: datos.email,
            localidad: datos.localidad,
            created_at: Utc::now(),
        };
        clientes.push(cliente.clone());
        Ok(cliente)
    }

    async fn actualizar(&self, cliente: &Cliente) -> Result<Cliente, AppError> {
        self.registrar("actualizar");
        let mut clientes = self.clientes.lock().unwrap();
        let existente = clientes
            .iter_mut()
            .find(|c| c.id == cliente.id)
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;
        *existente = cliente.clone();
        Ok(cliente.clone())
    }

    async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        self.registrar("eliminar");
        if self.fallar_eliminar {
            return Err(AppError::Database("fallo simulado".to_string()));
        }
        self.clientes.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePolizaStore {
    pub polizas: Mutex<Vec<PolizaConCompania>>,
    pub llamadas: Mutex<Vec<String>>,
    pub fallar_eliminar_por_cliente: bool,
}

impl FakePolizaStore {
    fn registrar(&self, llamada: &str) {
        self.llamadas.lock().unwrap().push(llamada.to_string());
    }
}

#[async_trait]
impl PolizaStore for FakePolizaStore {
    async fn insertar(&self, datos: NuevaPoliza) -> Result<PolizaConCompania, AppError> {
        self.registrar("insertar");
        let mut polizas = self.polizas.lock().unwrap();
        let poliza = PolizaConCompania {
            id: polizas.len() as i64 + 1,
            numero: datos.numero,
            compania_id: datos.compania_id,
            cliente_id: datos.cliente_id,
            fecha_vigencia: datos.fecha_vigencia,
            created_at: Utc::now(),
            compania_nombre: "Compañía de prueba".to_string(),
        };
        polizas.push(poliza.clone());
        Ok(poliza)
    }

    async fn listar_por_cliente(&self, cliente_id: i64) -> Result<Vec<PolizaConCompania>, AppError> {
        self.registrar("listar_por_cliente");
        Ok(self
            .polizas
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.cliente_id == cliente_id)
            .cloned()
            .collect())
    }

    async fn buscar_por_id(&self, id: i64) -> Result<Option<Poliza>, AppError> {
        self.registrar("buscar_por_id");
        Ok(self.polizas.lock().unwrap().iter().find(|p| p.id == id).map(|p| Poliza {
            id: p.id,
            numero: p.numero.clone(),
            compania_id: p.compania_id,
            cliente_id: p.cliente_id,
            fecha_vigencia: p.fecha_vigencia,
            created_at: p.created_at,
        }))
    }

    async fn actualizar(&self, poliza: &Poliza) -> Result<PolizaConCompania, AppError> {
        self.registrar("actualizar");
        let mut polizas = self.polizas.lock().unwrap();
        let existente = polizas
            .iter_mut()
            .find(|p| p.id == poliza.id)
            .ok_or_else(|| AppError::NotFound("Póliza no encontrada".to_string()))?;
        existente.numero = poliza.numero.clone();
        existente.compania_id = poliza.compania_id;
        existente.fecha_vigencia = poliza.fecha_vigencia;
        Ok(existente.clone())
    }

    async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        self.registrar("eliminar");
        self.polizas.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn eliminar_por_cliente(&self, cliente_id: i64) -> Result<u64, AppError> {
        self.registrar("eliminar_por_cliente");
        if self.fallar_eliminar_por_cliente {
            return Err(AppError::Database("fallo simulado".to_string()));
        }
        let mut polizas = self.polizas.lock().unwrap();
        let antes = polizas.len();
        polizas.retain(|p| p.cliente_id != cliente_id);
        Ok((antes - polizas.len()) as u64)
    }
}

#[derive(Default)]
pub struct FakeCompaniaStore {
    pub companias: Mutex<Vec<Compania>>,
    pub llamadas: Mutex<Vec<String>>,
}

impl FakeCompaniaStore {
    pub fn con_ids(ids: &[i64]) -> Self {
        let companias = ids
            .iter()
            .map(|id| Compania {
                id: *id,
                nombre: format!("Compañía {}", id),
                created_at: Utc::now(),
            })
            .collect();
        Self {
            companias: Mutex::new(companias),
            llamadas: Mutex::new(Vec::new()),
        }
    }

    fn registrar(&self, llamada: &str) {
        self.llamadas.lock().unwrap().push(llamada.to_string());
    }
}

#[async_trait]
impl CompaniaStore for FakeCompaniaStore {
    async fn listar(&self) -> Result<Vec<Compania>, AppError> {
        self.registrar("listar");
        Ok(self.companias.lock().unwrap().clone())
    }

    async fn existe(&self, id: i64) -> Result<bool, AppError> {
        self.registrar("existe");
        Ok(self.companias.lock().unwrap().iter().any(|c| c.id == id))
    }

    async fn insertar(&self, nombre: &str) -> Result<Compania, AppError> {
        self.registrar("insertar");
        let mut companias = self.companias.lock().unwrap();
        if companias.iter().any(|c| c.nombre == nombre) {
            return Err(AppError::Conflict(
                "crear compañía: ya existe un registro con esos datos".to_string(),
            ));
        }
        let compania = Compania {
            id: companias.len() as i64 + 1,
            nombre: nombre.to_string(),
            created_at: Utc::now(),
        };
        companias.push(compania.clone());
        Ok(compania)
    }

    async fn actualizar(&self, id: i64, nombre: &str) -> Result<Compania, AppError> {
        self.registrar("actualizar");
        let mut companias = self.companias.lock().unwrap();
        let existente = companias
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Compañía no encontrada".to_string()))?;
        existente.nombre = nombre.to_string();
        Ok(existente.clone())
    }
}

#[derive(Default)]
pub struct FakeAvisoStore {
    pub avisos: Mutex<Vec<AvisoProximo>>,
    pub llamadas: Mutex<Vec<String>>,
}

impl FakeAvisoStore {
    pub fn con_avisos(avisos: Vec<AvisoProximo>) -> Self {
        Self {
            avisos: Mutex::new(avisos),
            llamadas: Mutex::new(Vec::new()),
        }
    }

    fn registrar(&self, llamada: &str) {
        self.llamadas.lock().unwrap().push(llamada.to_string());
    }
}

#[async_trait]
impl AvisoStore for FakeAvisoStore {
    async fn refrescar(&self) -> Result<(), AppError> {
        self.registrar("refrescar");
        Ok(())
    }

    async fn listar_proximos(&self) -> Result<Vec<AvisoProximo>, AppError> {
        self.registrar("listar_proximos");
        Ok(self.avisos.lock().unwrap().clone())
    }

    async fn actualizar_estado(&self, aviso_id: i64, estado: EstadoAviso) -> Result<(), AppError> {
        self.registrar("actualizar_estado");
        let mut avisos = self.avisos.lock().unwrap();
        let aviso = avisos
            .iter_mut()
            .find(|a| a.id == aviso_id)
            .ok_or_else(|| AppError::NotFound("Aviso no encontrado".to_string()))?;
        aviso.estado = estado.as_str().to_string();
        Ok(())
    }

    async fn marcar_pago(&self, aviso_id: i64) -> Result<(), AppError> {
        self.registrar("marcar_pago");
        let mut avisos = self.avisos.lock().unwrap();
        if let Some(aviso) = avisos.iter_mut().find(|a| a.id == aviso_id) {
            aviso.estado = "pagado".to_string();
        }
        Ok(())
    }
}
