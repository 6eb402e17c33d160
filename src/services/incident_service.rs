use tracing::info;

use crate::models::{
    CreateIncidentRequest, Incident, IncidentListResponse, IncidentState, MechanicId,
    UpdateIncidentRequest, Vehicle,
};
use crate::state::ShopState;
use crate::utils::errors::{not_found_error, ShopError, ShopResult};
use crate::utils::text::normalize_plate;

/// Servicio de incidencias. Un vehículo tiene como mucho una incidencia viva.
pub struct IncidentService<'a> {
    state: &'a mut ShopState,
}

impl<'a> IncidentService<'a> {
    pub fn new(state: &'a mut ShopState) -> Self {
        Self { state }
    }

    /// Registra una incidencia nueva en un vehículo sin incidencia
    pub fn register_incident(
        &mut self,
        plate: &str,
        request: CreateIncidentRequest,
    ) -> ShopResult<&Incident> {
        let plate = normalize_plate(plate);
        let vehicle = self
            .state
            .clients
            .find_vehicle_mut(&plate)
            .ok_or_else(|| not_found_error("Vehículo", &plate))?;

        if vehicle.incident().is_some() {
            return Err(ShopError::DuplicateIncident(plate));
        }

        let id = self.state.incident_seq.next_id();
        vehicle.set_incident(Some(Incident::new(id, request)));
        info!(incident_id = id, plate = %plate, "📝 Incidencia registrada");

        vehicle
            .incident()
            .ok_or_else(|| not_found_error("Incidencia", id))
    }

    pub fn get_incident(&self, plate: &str) -> ShopResult<&Incident> {
        let plate = normalize_plate(plate);
        let (_, vehicle) = self
            .state
            .clients
            .find_vehicle(&plate)
            .ok_or_else(|| not_found_error("Vehículo", &plate))?;

        vehicle
            .incident()
            .ok_or_else(|| not_found_error("Incidencia del vehículo", plate))
    }

    pub fn list_incidents(&self) -> Vec<IncidentListResponse> {
        self.state
            .clients
            .vehicles()
            .filter_map(|(owner, v)| {
                v.incident().map(|incident| IncidentListResponse {
                    plate: v.plate.clone(),
                    owner_name: owner.name.clone(),
                    incident: incident.clone(),
                })
            })
            .collect()
    }

    pub fn update_incident(
        &mut self,
        plate: &str,
        request: UpdateIncidentRequest,
    ) -> ShopResult<&Incident> {
        let incident = self.incident_mut(plate)?;
        incident.kind = request.kind;
        incident.priority = request.priority;
        incident.description = request.description;

        info!(incident_id = incident.id, "✏️ Incidencia modificada");
        Ok(&*incident)
    }

    /// Quita la incidencia del vehículo (sin archivarla)
    pub fn delete_incident(&mut self, plate: &str) -> ShopResult<Incident> {
        let plate = normalize_plate(plate);
        let incident = self
            .vehicle_mut(&plate)?
            .set_incident(None)
            .ok_or_else(|| not_found_error("Incidencia del vehículo", &plate))?;

        info!(incident_id = incident.id, plate = %plate, "🗑️ Incidencia eliminada");
        Ok(incident)
    }

    /// Cambia el estado. Cualquier transición está permitida.
    pub fn change_state(&mut self, plate: &str, state: IncidentState) -> ShopResult<&Incident> {
        let incident = self.incident_mut(plate)?;
        incident.set_state(state);

        info!(incident_id = incident.id, state = %state, "🔄 Estado de incidencia actualizado");
        Ok(&*incident)
    }

    /// Asigna un mecánico existente. Devuelve `false` si ya estaba asignado.
    pub fn assign_mechanic(&mut self, plate: &str, mechanic_id: MechanicId) -> ShopResult<bool> {
        if !self.state.mechanics.exists(mechanic_id) {
            return Err(not_found_error("Mecánico", mechanic_id));
        }

        let incident = self.incident_mut(plate)?;
        let added = incident.assign_mechanic(mechanic_id);
        info!(
            incident_id = incident.id,
            mechanic_id,
            added,
            "🔧 Mecánico asignado a incidencia"
        );
        Ok(added)
    }

    pub fn is_high_priority(&self, plate: &str) -> ShopResult<bool> {
        Ok(self.get_incident(plate)?.is_high_priority())
    }

    fn vehicle_mut(&mut self, plate: &str) -> ShopResult<&mut Vehicle> {
        self.state
            .clients
            .find_vehicle_mut(plate)
            .ok_or_else(|| not_found_error("Vehículo", plate))
    }

    fn incident_mut(&mut self, plate: &str) -> ShopResult<&mut Incident> {
        let plate = normalize_plate(plate);
        self.vehicle_mut(&plate)?
            .incident_mut()
            .ok_or_else(|| not_found_error("Incidencia del vehículo", plate))
    }
}
