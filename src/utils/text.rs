//! Normalización de texto
//!
//! Helpers para comparar lo que escribe el operador con los vocabularios
//! cerrados del taller (tipos, prioridades, estados).

/// Pasa a minúsculas, recorta y elimina tildes
pub fn normalize_keyword(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            '_' | '-' => ' ',
            other => other,
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normaliza una matrícula: sin espacios ni guiones, en mayúsculas
pub fn normalize_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_uppercase()
}
