//! Services module
//!
//! Este módulo contiene la lógica de negocio del taller. Cada servicio toma
//! prestado el `ShopState` y encapsula operaciones que pueden involucrar
//! varios repositorios y el pool de plazas.

pub mod allocation_service;
pub mod bay_pool;
pub mod client_service;
pub mod incident_service;
pub mod mechanic_service;
pub mod report_service;
pub mod vehicle_service;

pub use allocation_service::{AllocationService, Assignment, MechanicBay};
pub use bay_pool::{BayHolder, BayPool, Occupancy, BAYS_PER_MECHANIC};
pub use client_service::{ClientService, DeletedClient};
pub use incident_service::IncidentService;
pub use mechanic_service::{DeletedMechanic, MechanicService, RecomputeOutcome};
pub use report_service::{ReportService, ShopStatusReport};
pub use vehicle_service::{DeletedVehicle, VehicleService};
