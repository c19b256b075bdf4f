//! Modelos de dominio

pub mod aviso;
pub mod cliente;
pub mod compania;
pub mod poliza;
