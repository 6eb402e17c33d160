//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y la normalización de textos
//! introducidos por el operador.

pub mod errors;
pub mod text;

pub use errors::*;
