//! Estado de la aplicación
//!
//! Este módulo define el estado del taller que se pasa por referencia a cada
//! servicio. No hay estado global: todo vive en `ShopState`.

use tracing::info;

use crate::models::{CreateMechanicRequest, IncidentSequence, RepairKind};
use crate::repositories::{ClientRepository, MechanicRepository};
use crate::services::bay_pool::BayPool;

#[derive(Debug, Default)]
pub struct ShopState {
    pub clients: ClientRepository,
    pub mechanics: MechanicRepository,
    pub bays: BayPool,
    pub incident_seq: IncidentSequence,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruye el pool de plazas a partir de la plantilla actual
    pub fn recompute_bays(&mut self) {
        self.bays.recompute(self.mechanics.len());
    }

    /// Inicializa la plantilla de ejemplo y recalcula las plazas
    pub fn initialize_demo_roster(&mut self) {
        let demo = [
            CreateMechanicRequest {
                id: 1,
                name: "Laura".to_string(),
                specialty: RepairKind::Mechanical,
                years_experience: 3,
            },
            CreateMechanicRequest {
                id: 2,
                name: "Pedro".to_string(),
                specialty: RepairKind::Electrical,
                years_experience: 5,
            },
        ];

        for request in demo {
            if let Err(e) = self.mechanics.create(request) {
                tracing::warn!("⚠️ Mecánico de ejemplo omitido: {}", e);
            }
        }
        self.recompute_bays();

        info!(
            mechanics = self.mechanics.len(),
            bays = self.bays.len(),
            "🔧 Plantilla de ejemplo cargada"
        );
    }
}
