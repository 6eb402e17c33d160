//! Pool de plazas del taller
//!
//! El número de plazas se deriva de la plantilla: 2 por mecánico, activo o no.
//! Recalcular reconstruye el pool entero y descarta toda ocupación previa.

use serde::Serialize;

use crate::models::{Bay, BayId, BayOccupancy, ClientId, MechanicId};

/// Plazas por mecánico en plantilla
pub const BAYS_PER_MECHANIC: usize = 2;

/// Recuento de plazas ocupadas/libres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub occupied: usize,
    pub free: usize,
}

impl Occupancy {
    pub fn total(&self) -> usize {
        self.occupied + self.free
    }
}

/// Referencia por la que se liberan plazas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayHolder<'a> {
    Client(ClientId),
    Mechanic(MechanicId),
    Vehicle(&'a str),
}

impl BayHolder<'_> {
    fn holds(&self, occupancy: &BayOccupancy) -> bool {
        match *self {
            BayHolder::Client(id) => occupancy.client_id == id,
            BayHolder::Mechanic(id) => occupancy.mechanic_id == id,
            BayHolder::Vehicle(plate) => occupancy.plate == plate,
        }
    }
}

#[derive(Debug, Default)]
pub struct BayPool {
    bays: Vec<Bay>,
}

impl BayPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruye el pool con `2 * mechanic_count` plazas libres, ids desde 1
    pub fn recompute(&mut self, mechanic_count: usize) {
        let total = BAYS_PER_MECHANIC * mechanic_count;
        self.bays = (1..=total).map(|id| Bay::new(id as BayId)).collect();
    }

    pub fn status(&self) -> Occupancy {
        let occupied = self.bays.iter().filter(|b| b.is_occupied()).count();
        Occupancy {
            occupied,
            free: self.bays.len() - occupied,
        }
    }

    /// Primera plaza libre por id ascendente
    pub fn find_free_bay(&self) -> Option<&Bay> {
        self.bays.iter().find(|b| b.is_free())
    }

    pub fn find_free_bay_mut(&mut self) -> Option<&mut Bay> {
        self.bays.iter_mut().find(|b| b.is_free())
    }

    /// Libera toda plaza que referencie al cliente, mecánico o vehículo.
    /// Devuelve cuántas plazas se liberaron.
    pub fn release_bays_of(&mut self, holder: BayHolder<'_>) -> usize {
        let mut released = 0;
        for bay in &mut self.bays {
            let held = bay.occupancy.as_ref().is_some_and(|o| holder.holds(o));
            if held {
                bay.release();
                released += 1;
            }
        }
        released
    }

    pub fn bays(&self) -> &[Bay] {
        &self.bays
    }

    pub fn get(&self, id: BayId) -> Option<&Bay> {
        self.bays.iter().find(|b| b.id == id)
    }

    pub fn bays_of_mechanic(&self, mechanic_id: MechanicId) -> impl Iterator<Item = &Bay> {
        self.bays
            .iter()
            .filter(move |b| b.mechanic_id() == Some(mechanic_id))
    }

    pub fn len(&self) -> usize {
        self.bays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bays.is_empty()
    }
}
