//! Gestión de plazas de un taller mecánico
//!
//! Clientes con sus vehículos, incidencias, mecánicos y un pool de plazas
//! cuyo tamaño depende de la plantilla activa.

pub mod cli;
pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;

pub use state::ShopState;
pub use utils::errors::{ShopError, ShopResult};
