//! Búsqueda de texto sin acentos
//!
//! Normaliza texto removiendo diacríticos y convirtiendo a minúsculas,
//! para que "José", "jose" y "JOSÉ" se comparen iguales.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizar texto: minúsculas, descomposición NFD y sin marcas diacríticas.
pub fn normalizar_texto(texto: &str) -> String {
    texto
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Buscar un término dentro de un texto ignorando acentos y mayúsculas.
pub fn buscar_sin_acentos(termino: &str, texto: &str) -> bool {
    normalizar_texto(texto).contains(&normalizar_texto(termino))
}
