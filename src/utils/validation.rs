//! Utilidades de validación y normalización de campos

/// Normalizar un campo opcional: trim, y None si queda vacío.
/// Los formularios mandan strings en blanco donde la base espera NULL.
pub fn normalizar_opcional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let v = v.trim().to_string();
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizar_opcional() {
        assert_eq!(normalizar_opcional(None), None);
        assert_eq!(normalizar_opcional(Some("".to_string())), None);
        assert_eq!(normalizar_opcional(Some("   ".to_string())), None);
        assert_eq!(
            normalizar_opcional(Some("  hola  ".to_string())),
            Some("hola".to_string())
        );
    }
}
