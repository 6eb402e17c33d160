//! Motor de asignación de plazas
//!
//! Une un vehículo (y su cliente) con un mecánico en la primera plaza libre.
//! La comprobación de capacidad va antes de resolver vehículo y mecánico.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{BayId, BayOccupancy, ClientId, MechanicId};
use crate::services::bay_pool::{BayHolder, Occupancy};
use crate::state::ShopState;
use crate::utils::errors::{not_found_error, ShopError, ShopResult};
use crate::utils::text::normalize_plate;

/// Resultado de asignar un vehículo a una plaza
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub bay_id: BayId,
    pub plate: String,
    pub client_id: ClientId,
    pub mechanic_id: MechanicId,
    pub before: Occupancy,
    pub after: Occupancy,
}

/// Plaza atendida por un mecánico
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MechanicBay {
    pub bay_id: BayId,
    pub plate: String,
    pub client_id: ClientId,
}

pub struct AllocationService<'a> {
    state: &'a mut ShopState,
}

impl<'a> AllocationService<'a> {
    pub fn new(state: &'a mut ShopState) -> Self {
        Self { state }
    }

    pub fn status(&self) -> Occupancy {
        self.state.bays.status()
    }

    /// Asigna el vehículo a la primera plaza libre con el mecánico indicado
    pub fn assign_vehicle_to_bay(
        &mut self,
        plate: &str,
        mechanic_id: MechanicId,
    ) -> ShopResult<Assignment> {
        let before = self.state.bays.status();
        if before.free == 0 {
            return Err(ShopError::NoFreeBay);
        }

        let plate = normalize_plate(plate);
        let client_id = self
            .state
            .clients
            .find_vehicle(&plate)
            .map(|(owner, _)| owner.id)
            .ok_or_else(|| not_found_error("Vehículo", &plate))?;

        if self.state.mechanics.find_available(mechanic_id).is_none() {
            return Err(ShopError::MechanicUnavailable(mechanic_id));
        }

        let bay = self
            .state
            .bays
            .find_free_bay_mut()
            .ok_or(ShopError::NoFreeBay)?;
        bay.occupy(BayOccupancy {
            client_id,
            mechanic_id,
            plate: plate.clone(),
        });
        let bay_id = bay.id;

        let after = self.state.bays.status();
        info!(
            bay_id,
            plate = %plate,
            client_id,
            mechanic_id,
            occupied = after.occupied,
            "🅿️ Vehículo asignado a plaza"
        );

        Ok(Assignment {
            bay_id,
            plate,
            client_id,
            mechanic_id,
            before,
            after,
        })
    }

    /// Registra la salida del vehículo: libera las plazas que ocupe
    pub fn release_vehicle(&mut self, plate: &str) -> ShopResult<usize> {
        let plate = normalize_plate(plate);
        if !self.state.clients.plate_exists(&plate) {
            return Err(not_found_error("Vehículo", plate));
        }

        let released = self.state.bays.release_bays_of(BayHolder::Vehicle(&plate));
        info!(plate = %plate, released, "🚪 Salida de vehículo registrada");
        Ok(released)
    }

    /// Vehículos asignados a un mecánico, por plaza
    pub fn vehicles_of_mechanic(&self, mechanic_id: MechanicId) -> ShopResult<Vec<MechanicBay>> {
        if !self.state.mechanics.exists(mechanic_id) {
            return Err(not_found_error("Mecánico", mechanic_id));
        }
        debug!(mechanic_id, "Consultando plazas del mecánico");

        Ok(self
            .state
            .bays
            .bays_of_mechanic(mechanic_id)
            .filter_map(|bay| {
                bay.occupancy.as_ref().map(|o| MechanicBay {
                    bay_id: bay.id,
                    plate: o.plate.clone(),
                    client_id: o.client_id,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CreateClientRequest, CreateMechanicRequest, CreateVehicleRequest, RepairKind, Vehicle,
    };

    fn shop(mechanics: &[MechanicId]) -> ShopState {
        let mut state = ShopState::new();
        for &id in mechanics {
            state
                .mechanics
                .create(CreateMechanicRequest {
                    id,
                    name: format!("M{}", id),
                    specialty: RepairKind::Mechanical,
                    years_experience: 1,
                })
                .unwrap();
        }
        state.recompute_bays();
        state
            .clients
            .create(CreateClientRequest {
                id: 7,
                name: "Ana".to_string(),
                phone: "600000000".to_string(),
                email: "ana@example.com".to_string(),
            })
            .unwrap();
        for plate in ["1234ABC", "5678DEF", "9999GHI"] {
            state
                .clients
                .add_vehicle(
                    7,
                    Vehicle::new(CreateVehicleRequest {
                        owner_id: 7,
                        plate: plate.to_string(),
                        brand: "Seat".to_string(),
                        model: "León".to_string(),
                        entry_date: "2024-04-01".to_string(),
                        exit_date: "2024-04-02".to_string(),
                    }),
                )
                .unwrap();
        }
        state
    }

    #[test]
    fn test_assign_first_free_bay() {
        let mut state = shop(&[1]);
        let mut service = AllocationService::new(&mut state);

        let assignment = service.assign_vehicle_to_bay("1234ABC", 1).unwrap();
        assert_eq!(assignment.bay_id, 1);
        assert_eq!(assignment.client_id, 7);
        assert_eq!(assignment.before, Occupancy { occupied: 0, free: 2 });
        assert_eq!(assignment.after, Occupancy { occupied: 1, free: 1 });

        let second = service.assign_vehicle_to_bay("5678DEF", 1).unwrap();
        assert_eq!(second.bay_id, 2);
        assert_eq!(service.status(), Occupancy { occupied: 2, free: 0 });
    }

    #[test]
    fn test_no_free_bay_is_checked_first() {
        let mut state = shop(&[]);
        let mut service = AllocationService::new(&mut state);
        assert!(matches!(
            service.assign_vehicle_to_bay("NO-EXISTE", 99),
            Err(ShopError::NoFreeBay)
        ));
    }

    #[test]
    fn test_full_shop() {
        let mut state = shop(&[1]);
        let mut service = AllocationService::new(&mut state);
        service.assign_vehicle_to_bay("1234ABC", 1).unwrap();
        service.assign_vehicle_to_bay("5678DEF", 1).unwrap();

        assert!(matches!(
            service.assign_vehicle_to_bay("9999GHI", 1),
            Err(ShopError::NoFreeBay)
        ));
        assert_eq!(service.status(), Occupancy { occupied: 2, free: 0 });
    }

    #[test]
    fn test_unknown_vehicle_and_unavailable_mechanic() {
        let mut state = shop(&[1, 2]);
        state.mechanics.find_by_id_mut(2).unwrap().set_active(false);
        let mut service = AllocationService::new(&mut state);

        assert!(matches!(
            service.assign_vehicle_to_bay("0000XXX", 1),
            Err(ShopError::NotFound { .. })
        ));
        assert!(matches!(
            service.assign_vehicle_to_bay("1234ABC", 2),
            Err(ShopError::MechanicUnavailable(2))
        ));
        assert!(matches!(
            service.assign_vehicle_to_bay("1234ABC", 3),
            Err(ShopError::MechanicUnavailable(3))
        ));
        assert_eq!(service.status().occupied, 0);
    }

    #[test]
    fn test_same_client_may_hold_several_bays() {
        let mut state = shop(&[1]);
        let mut service = AllocationService::new(&mut state);
        service.assign_vehicle_to_bay("1234ABC", 1).unwrap();
        service.assign_vehicle_to_bay("1234ABC", 1).unwrap();
        assert_eq!(service.status().occupied, 2);
    }

    #[test]
    fn test_release_vehicle() {
        let mut state = shop(&[1]);
        let mut service = AllocationService::new(&mut state);
        service.assign_vehicle_to_bay("1234ABC", 1).unwrap();
        service.assign_vehicle_to_bay("5678DEF", 1).unwrap();

        assert_eq!(service.release_vehicle("1234abc").unwrap(), 1);
        assert_eq!(service.release_vehicle("1234ABC").unwrap(), 0);
        assert!(matches!(
            service.release_vehicle("0000XXX"),
            Err(ShopError::NotFound { .. })
        ));

        let next = service.assign_vehicle_to_bay("9999GHI", 1).unwrap();
        assert_eq!(next.bay_id, 1);
    }

    #[test]
    fn test_vehicles_of_mechanic() {
        let mut state = shop(&[1, 2]);
        let mut service = AllocationService::new(&mut state);
        service.assign_vehicle_to_bay("1234ABC", 1).unwrap();
        service.assign_vehicle_to_bay("5678DEF", 2).unwrap();
        service.assign_vehicle_to_bay("9999GHI", 1).unwrap();

        let bays = service.vehicles_of_mechanic(1).unwrap();
        let plates: Vec<&str> = bays.iter().map(|b| b.plate.as_str()).collect();
        assert_eq!(plates, vec!["1234ABC", "9999GHI"]);
        assert!(service.vehicles_of_mechanic(8).is_err());
    }
}
