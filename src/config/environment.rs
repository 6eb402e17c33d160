//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales y tienen un valor por defecto.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub log_level: Level,
    pub seed_demo_data: bool,
    pub use_colors: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: Level::WARN,
            seed_demo_data: true,
            use_colors: true,
        }
    }
}

impl EnvironmentConfig {
    /// Lee la configuración del entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => Level::from_str(raw.trim())
                .map_err(|e| anyhow!("{}", e))
                .with_context(|| format!("LOG_LEVEL no válido: '{}'", raw))?,
            None => defaults.log_level,
        };

        let mut config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level,
            use_colors: parse_flag(lookup("USE_COLORS"), defaults.use_colors)
                .context("USE_COLORS no válido")?,
            ..defaults
        };

        // En producción no se cargan datos de ejemplo salvo que se pidan
        config.seed_demo_data = parse_flag(lookup("SEED_DEMO_DATA"), !config.is_production())
            .context("SEED_DEMO_DATA no válido")?;

        Ok(config)
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_flag(value: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sí" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("valor booleano desconocido: '{}'", other)),
    }
}
