pub mod aviso_routes;
pub mod cliente_routes;
pub mod compania_routes;
pub mod localidad_routes;
pub mod poliza_routes;
