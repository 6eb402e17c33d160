//! Modelo de Bay (plaza)
//!
//! Una plaza está libre o completamente ocupada: la ocupación guarda a la vez
//! cliente, mecánico y matrícula, así que no existe un estado a medias.

use serde::{Deserialize, Serialize};

use crate::models::client::ClientId;
use crate::models::mechanic::MechanicId;

pub type BayId = u32;

/// Quién ocupa una plaza (ids, no propiedad)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BayOccupancy {
    pub client_id: ClientId,
    pub mechanic_id: MechanicId,
    pub plate: String,
}

/// Plaza física dentro del taller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bay {
    pub id: BayId,
    pub occupancy: Option<BayOccupancy>,
}

impl Bay {
    pub fn new(id: BayId) -> Self {
        Self { id, occupancy: None }
    }

    pub fn occupy(&mut self, occupancy: BayOccupancy) {
        self.occupancy = Some(occupancy);
    }

    /// Libera la plaza y devuelve quién la ocupaba
    pub fn release(&mut self) -> Option<BayOccupancy> {
        self.occupancy.take()
    }

    pub fn is_free(&self) -> bool {
        self.occupancy.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupancy.is_some()
    }

    pub fn client_id(&self) -> Option<ClientId> {
        self.occupancy.as_ref().map(|o| o.client_id)
    }

    pub fn mechanic_id(&self) -> Option<MechanicId> {
        self.occupancy.as_ref().map(|o| o.mechanic_id)
    }

    pub fn plate(&self) -> Option<&str> {
        self.occupancy.as_ref().map(|o| o.plate.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupy_and_release() {
        let mut bay = Bay::new(1);
        assert!(bay.is_free());
        assert_eq!(bay.client_id(), None);

        bay.occupy(BayOccupancy {
            client_id: 7,
            mechanic_id: 1,
            plate: "1234ABC".to_string(),
        });
        assert!(bay.is_occupied());
        assert_eq!(bay.client_id(), Some(7));
        assert_eq!(bay.mechanic_id(), Some(1));
        assert_eq!(bay.plate(), Some("1234ABC"));

        let previous = bay.release();
        assert_eq!(previous.map(|o| o.client_id), Some(7));
        assert!(bay.is_free());
        assert_eq!(bay.mechanic_id(), None);
        assert_eq!(bay.release(), None);
    }
}
