//! Gateways de persistencia
//!
//! Un trait por agregado con su implementación PostgreSQL. Los controllers
//! trabajan contra los traits, así los tests los ejercitan con fakes en
//! memoria sin tocar la base.

pub mod aviso_repository;
pub mod cliente_repository;
pub mod compania_repository;
pub mod poliza_repository;

pub use aviso_repository::{AvisoRepository, AvisoStore};
pub use cliente_repository::{ClienteRepository, ClienteStore};
pub use compania_repository::{CompaniaRepository, CompaniaStore};
pub use poliza_repository::{PolizaRepository, PolizaStore};
