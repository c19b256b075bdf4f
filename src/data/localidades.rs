//! Lista de referencia de localidades argentinas
//!
//! Lista fija que alimenta el selector de localidad del formulario de
//! clientes. La localidad se guarda como texto libre; esta lista solo
//! acota lo que se ofrece en el picker.

use crate::utils::busqueda::buscar_sin_acentos;

/// Máximo de resultados que devuelve el filtro, como el combobox original.
pub const MAX_RESULTADOS: usize = 50;

pub const LOCALIDADES_ARGENTINA: &[&str] = &[
    "Avellaneda",
    "Bahía Blanca",
    "Bariloche",
    "Berazategui",
    "Buenos Aires",
    "Catamarca",
    "Comodoro Rivadavia",
    "Concordia",
    "Córdoba",
    "Corrientes",
    "Formosa",
    "General Roca",
    "Godoy Cruz",
    "Guaymallén",
    "Jujuy",
    "La Plata",
    "La Rioja",
    "Lanús",
    "Lomas de Zamora",
    "Mar del Plata",
    "Mendoza",
    "Merlo",
    "Moreno",
    "Neuquén",
    "Paraná",
    "Pergamino",
    "Posadas",
    "Quilmes",
    "Rafaela",
    "Resistencia",
    "Río Cuarto",
    "Río Gallegos",
    "Rosario",
    "Salta",
    "San Fernando del Valle",
    "San Juan",
    "San Luis",
    "San Miguel de Tucumán",
    "San Nicolás",
    "San Rafael",
    "San Salvador de Jujuy",
    "Santa Fe",
    "Santa Rosa",
    "Santiago del Estero",
    "Tandil",
    "Trelew",
    "Ushuaia",
    "Venado Tuerto",
    "Villa María",
    "Zárate",
];

/// Filtrar la lista ignorando acentos y mayúsculas, con tope de resultados.
pub fn filtrar(termino: &str) -> Vec<&'static str> {
    LOCALIDADES_ARGENTINA
        .iter()
        .filter(|localidad| buscar_sin_acentos(termino, localidad))
        .take(MAX_RESULTADOS)
        .copied()
        .collect()
}
