//! Datos de referencia embebidos

pub mod localidades;
