use tracing::info;

use crate::models::{
    Client, CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleListResponse,
};
use crate::services::bay_pool::BayHolder;
use crate::state::ShopState;
use crate::utils::errors::{not_found_error, ShopResult};
use crate::utils::text::normalize_plate;

/// Resultado de eliminar un vehículo
#[derive(Debug)]
pub struct DeletedVehicle {
    pub vehicle: Vehicle,
    pub owner_name: String,
    pub released_bays: usize,
}

/// Servicio de gestión de vehículos
pub struct VehicleService<'a> {
    state: &'a mut ShopState,
}

impl<'a> VehicleService<'a> {
    pub fn new(state: &'a mut ShopState) -> Self {
        Self { state }
    }

    pub fn create_vehicle(&mut self, mut request: CreateVehicleRequest) -> ShopResult<&Vehicle> {
        request.plate = normalize_plate(&request.plate);
        let owner_id = request.owner_id;
        let vehicle = self
            .state
            .clients
            .add_vehicle(owner_id, Vehicle::new(request))?;

        info!(plate = %vehicle.plate, owner_id, "🚗 Vehículo creado");
        Ok(vehicle)
    }

    pub fn list_vehicles(&self) -> Vec<VehicleListResponse> {
        self.state
            .clients
            .vehicles()
            .map(|(owner, v)| VehicleListResponse {
                plate: v.plate.clone(),
                brand: v.brand.clone(),
                model: v.model.clone(),
                owner_id: owner.id,
                owner_name: owner.name.clone(),
                incident_state: v.incident().map(|i| i.state.to_string()),
            })
            .collect()
    }

    pub fn find_vehicle(&self, plate: &str) -> ShopResult<(&Client, &Vehicle)> {
        let plate = normalize_plate(plate);
        self.state
            .clients
            .find_vehicle(&plate)
            .ok_or_else(|| not_found_error("Vehículo", plate))
    }

    pub fn update_vehicle(
        &mut self,
        plate: &str,
        request: UpdateVehicleRequest,
    ) -> ShopResult<&Vehicle> {
        let plate = normalize_plate(plate);
        let vehicle = self
            .state
            .clients
            .find_vehicle_mut(&plate)
            .ok_or_else(|| not_found_error("Vehículo", &plate))?;

        vehicle.apply(request);
        info!(plate = %plate, "✏️ Vehículo modificado");
        Ok(&*vehicle)
    }

    /// Elimina el vehículo (y su incidencia) y libera sus plazas
    pub fn delete_vehicle(&mut self, plate: &str) -> ShopResult<DeletedVehicle> {
        let plate = normalize_plate(plate);
        let owner_name = self
            .state
            .clients
            .find_vehicle(&plate)
            .map(|(owner, _)| owner.name.clone())
            .ok_or_else(|| not_found_error("Vehículo", &plate))?;

        let vehicle = self.state.clients.remove_vehicle(&plate)?;
        let released_bays = self
            .state
            .bays
            .release_bays_of(BayHolder::Vehicle(&plate));

        info!(plate = %plate, released_bays, "🗑️ Vehículo eliminado");
        Ok(DeletedVehicle {
            vehicle,
            owner_name,
            released_bays,
        })
    }
}
