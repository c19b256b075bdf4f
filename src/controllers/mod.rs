//! Workflows de dominio
//!
//! Cada controller coordina las escrituras multi-paso contra los gateways
//! y devuelve resultados tipados; los handlers de rutas quedan finitos.

pub mod aviso_controller;
pub mod cliente_controller;
pub mod compania_controller;
pub mod poliza_controller;

#[cfg(test)]
pub mod test_support;
