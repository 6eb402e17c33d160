//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del taller: clientes,
//! vehículos, incidencias, mecánicos y plazas.

pub mod bay;
pub mod client;
pub mod incident;
pub mod mechanic;
pub mod vehicle;

pub use bay::{Bay, BayId, BayOccupancy};
pub use client::{Client, ClientId, CreateClientRequest, UpdateClientRequest};
pub use incident::{
    CreateIncidentRequest, Incident, IncidentId, IncidentListResponse, IncidentSequence,
    IncidentState, Priority, RepairKind, UpdateIncidentRequest,
};
pub use mechanic::{CreateMechanicRequest, Mechanic, MechanicId, UpdateMechanicRequest};
pub use vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleListResponse};
