//! Servicio de plantilla de mecánicos
//!
//! Cualquier alta, baja o cambio de actividad reconstruye el pool de plazas.
//! La reconstrucción descarta todas las asignaciones vigentes, aunque el
//! tamaño de la plantilla no cambie.

use tracing::{info, warn};

use crate::models::{CreateMechanicRequest, Mechanic, MechanicId, UpdateMechanicRequest};
use crate::services::bay_pool::BayHolder;
use crate::state::ShopState;
use crate::utils::errors::{not_found_error, ShopResult};

/// Efecto de recalcular las plazas tras un cambio de plantilla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeOutcome {
    pub total_bays: usize,
    /// Asignaciones vigentes que se perdieron al reconstruir
    pub discarded_assignments: usize,
}

/// Resultado de eliminar un mecánico
#[derive(Debug)]
pub struct DeletedMechanic {
    pub mechanic: Mechanic,
    pub released_bays: usize,
    pub incidents_updated: usize,
    pub recompute: RecomputeOutcome,
}

pub struct MechanicService<'a> {
    state: &'a mut ShopState,
}

impl<'a> MechanicService<'a> {
    pub fn new(state: &'a mut ShopState) -> Self {
        Self { state }
    }

    /// Alta de mecánico (activo) y recálculo de plazas
    pub fn create_mechanic(
        &mut self,
        request: CreateMechanicRequest,
    ) -> ShopResult<RecomputeOutcome> {
        let id = self.state.mechanics.create(request)?.id;
        info!(mechanic_id = id, "👷 Mecánico creado");
        Ok(self.recompute())
    }

    pub fn list_mechanics(&self) -> &[Mechanic] {
        self.state.mechanics.list()
    }

    pub fn find_mechanic(&self, id: MechanicId) -> ShopResult<&Mechanic> {
        self.state
            .mechanics
            .find_by_id(id)
            .ok_or_else(|| not_found_error("Mecánico", id))
    }

    /// Modifica nombre, especialidad y experiencia. No toca las plazas.
    pub fn update_mechanic(
        &mut self,
        id: MechanicId,
        request: UpdateMechanicRequest,
    ) -> ShopResult<&Mechanic> {
        let mechanic = self.state.mechanics.update(id, request)?;
        info!(mechanic_id = id, "✏️ Mecánico modificado");
        Ok(mechanic)
    }

    /// Libera sus plazas, lo quita de las incidencias y recalcula
    pub fn delete_mechanic(&mut self, id: MechanicId) -> ShopResult<DeletedMechanic> {
        if !self.state.mechanics.exists(id) {
            return Err(not_found_error("Mecánico", id));
        }

        let released_bays = self.state.bays.release_bays_of(BayHolder::Mechanic(id));
        let incidents_updated = self
            .state
            .clients
            .vehicles_mut()
            .filter_map(|v| v.incident_mut())
            .map(|incident| incident.unassign_mechanic(id))
            .filter(|removed| *removed)
            .count();
        let mechanic = self.state.mechanics.delete(id)?;

        info!(
            mechanic_id = id,
            released_bays,
            incidents_updated,
            "🗑️ Mecánico eliminado"
        );
        Ok(DeletedMechanic {
            mechanic,
            released_bays,
            incidents_updated,
            recompute: self.recompute(),
        })
    }

    /// Activa o da de baja. Siempre recalcula, aunque el estado no cambie.
    pub fn set_active(&mut self, id: MechanicId, active: bool) -> ShopResult<RecomputeOutcome> {
        let mechanic = self
            .state
            .mechanics
            .find_by_id_mut(id)
            .ok_or_else(|| not_found_error("Mecánico", id))?;

        mechanic.set_active(active);
        info!(mechanic_id = id, active, "🔄 Estado de mecánico actualizado");
        Ok(self.recompute())
    }

    pub fn toggle_active(&mut self, id: MechanicId) -> ShopResult<RecomputeOutcome> {
        let active = self.find_mechanic(id)?.active;
        self.set_active(id, !active)
    }

    fn recompute(&mut self) -> RecomputeOutcome {
        let discarded_assignments = self.state.bays.status().occupied;
        self.state.recompute_bays();

        if discarded_assignments > 0 {
            warn!(
                discarded_assignments,
                "⚠️ Plazas recalculadas: se han perdido las asignaciones vigentes"
            );
        }
        RecomputeOutcome {
            total_bays: self.state.bays.len(),
            discarded_assignments,
        }
    }
}
