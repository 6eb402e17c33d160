//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! La matrícula es el identificador único en todo el taller.

use serde::{Deserialize, Serialize};

use crate::models::client::ClientId;
use crate::models::incident::Incident;

/// Vehículo registrado en el taller, propiedad de un cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Matrícula normalizada (mayúsculas, sin espacios, guiones ni guiones bajos)
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub entry_date: String,
    pub exit_date: String,
    /// Incidencia actual; sustituirla descarta la anterior
    pub incident: Option<Incident>,
}

impl Vehicle {
    pub fn new(request: CreateVehicleRequest) -> Self {
        Self {
            plate: request.plate,
            brand: request.brand,
            model: request.model,
            entry_date: request.entry_date,
            exit_date: request.exit_date,
            incident: None,
        }
    }

    pub fn incident(&self) -> Option<&Incident> {
        self.incident.as_ref()
    }

    pub fn incident_mut(&mut self) -> Option<&mut Incident> {
        self.incident.as_mut()
    }

    /// Sustituye la incidencia y devuelve la anterior
    pub fn set_incident(&mut self, incident: Option<Incident>) -> Option<Incident> {
        std::mem::replace(&mut self.incident, incident)
    }

    pub fn apply(&mut self, request: UpdateVehicleRequest) {
        self.brand = request.brand;
        self.model = request.model;
        self.entry_date = request.entry_date;
        self.exit_date = request.exit_date;
    }
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Clone)]
pub struct CreateVehicleRequest {
    pub owner_id: ClientId,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub entry_date: String,
    pub exit_date: String,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Clone)]
pub struct UpdateVehicleRequest {
    pub brand: String,
    pub model: String,
    pub entry_date: String,
    pub exit_date: String,
}

/// Vehículo para listados, con su propietario
#[derive(Debug, Clone, Serialize)]
pub struct VehicleListResponse {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub owner_id: ClientId,
    pub owner_name: String,
    pub incident_state: Option<String>,
}
