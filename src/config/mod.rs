//! Configuración del proyecto
//!
//! Este módulo contiene la configuración leída de variables de entorno
//! (opcionalmente desde un fichero `.env`).

pub mod environment;

pub use environment::*;
