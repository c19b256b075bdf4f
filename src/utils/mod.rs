//! Utilidades compartidas

pub mod busqueda;
pub mod errors;
pub mod validation;
