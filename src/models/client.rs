//! Modelo de Client

use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

pub type ClientId = u32;

/// Cliente del taller y sus vehículos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicles: Vec<Vehicle>,
}

impl Client {
    pub fn new(request: CreateClientRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            phone: request.phone,
            email: request.email,
            vehicles: Vec::new(),
        }
    }

    pub fn vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.plate == plate)
    }

    pub fn vehicle_mut(&mut self, plate: &str) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.plate == plate)
    }
}

/// Request para registrar un cliente
#[derive(Debug, Clone)]
pub struct CreateClientRequest {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Request para modificar un cliente
#[derive(Debug, Clone)]
pub struct UpdateClientRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
}
