use serde::Deserialize;

/// Request para crear una compañía
#[derive(Debug, Deserialize)]
pub struct CreateCompaniaRequest {
    pub nombre: String,
}

/// Request para renombrar una compañía
#[derive(Debug, Deserialize)]
pub struct UpdateCompaniaRequest {
    pub nombre: String,
}
