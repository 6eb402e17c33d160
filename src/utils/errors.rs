//! Sistema de manejo de errores
//!
//! Este módulo define los errores del taller. Todos son recuperables en el
//! menú salvo los de la consola (`Io`, `InputClosed`), que terminan el proceso.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Ya existe {entity} con identificador '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    #[error("{entity} '{id}' no encontrado")]
    NotFound { entity: &'static str, id: String },

    #[error("No hay plazas libres: taller lleno")]
    NoFreeBay,

    #[error("Mecánico {0} inexistente o no activo")]
    MechanicUnavailable(u32),

    #[error("El vehículo {0} ya tiene una incidencia (solo se permite una)")]
    DuplicateIncident(String),

    #[error("Opción no válida: {0}")]
    InvalidSelection(String),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Entrada cerrada: no hay más datos en la consola")]
    InputClosed,

    #[error("Error de entrada/salida: {0}")]
    Io(#[from] std::io::Error),
}

impl ShopError {
    /// Indica si el menú puede seguir tras mostrar el error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShopError::InputClosed | ShopError::Io(_))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type ShopResult<T> = Result<T, ShopError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(entity: &'static str, id: impl ToString) -> ShopError {
    ShopError::NotFound {
        entity,
        id: id.to_string(),
    }
}

/// Función helper para crear errores de identificador duplicado
pub fn duplicate_error(entity: &'static str, id: impl ToString) -> ShopError {
    ShopError::DuplicateId {
        entity,
        id: id.to_string(),
    }
}

/// Función helper para crear errores de selección inválida
pub fn invalid_selection_error(input: &str) -> ShopError {
    ShopError::InvalidSelection(input.trim().to_string())
}
