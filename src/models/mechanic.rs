//! Modelo de Mechanic
//!
//! Los mecánicos son entidades independientes. Plazas e incidencias los
//! referencian por id.

use serde::{Deserialize, Serialize};

use crate::models::incident::RepairKind;

pub type MechanicId = u32;

/// Trabajador del taller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mechanic {
    pub id: MechanicId,
    pub name: String,
    pub specialty: RepairKind,
    pub years_experience: u32,
    /// true = activo, false = de baja
    pub active: bool,
}

impl Mechanic {
    /// Los mecánicos nuevos empiezan activos
    pub fn new(request: CreateMechanicRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            specialty: request.specialty,
            years_experience: request.years_experience,
            active: true,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_available(&self) -> bool {
        self.active
    }

    pub fn status_label(&self) -> &'static str {
        if self.active {
            "activo"
        } else {
            "baja"
        }
    }
}

/// Request para dar de alta un mecánico
#[derive(Debug, Clone)]
pub struct CreateMechanicRequest {
    pub id: MechanicId,
    pub name: String,
    pub specialty: RepairKind,
    pub years_experience: u32,
}

/// Request para modificar los datos de un mecánico
#[derive(Debug, Clone)]
pub struct UpdateMechanicRequest {
    pub name: String,
    pub specialty: RepairKind,
    pub years_experience: u32,
}
