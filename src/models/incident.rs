//! Modelo de Incident
//!
//! Una incidencia es el trabajo o avería a reparar en un vehículo. Cada
//! vehículo tiene como mucho una incidencia viva.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::mechanic::MechanicId;
use crate::utils::text::normalize_keyword;

pub type IncidentId = u64;

/// Tipo de trabajo - también se usa como especialidad del mecánico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairKind {
    Mechanical,
    Electrical,
    Bodywork,
}

impl RepairKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairKind::Mechanical => "mecánica",
            RepairKind::Electrical => "eléctrica",
            RepairKind::Bodywork => "carrocería",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match normalize_keyword(s).as_str() {
            "mecanica" | "mechanical" => Some(RepairKind::Mechanical),
            "electrica" | "electrical" => Some(RepairKind::Electrical),
            "carroceria" | "bodywork" => Some(RepairKind::Bodywork),
            _ => None,
        }
    }
}

impl fmt::Display for RepairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prioridad de la incidencia
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "baja",
            Priority::Medium => "media",
            Priority::High => "alta",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match normalize_keyword(s).as_str() {
            "baja" | "low" => Some(Priority::Low),
            "media" | "medium" => Some(Priority::Medium),
            "alta" | "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estado de la incidencia. Las transiciones son libres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentState {
    Open,
    InProgress,
    Closed,
}

impl IncidentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentState::Open => "abierta",
            IncidentState::InProgress => "en proceso",
            IncidentState::Closed => "cerrada",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match normalize_keyword(s).as_str() {
            "abierta" | "open" => Some(IncidentState::Open),
            "en proceso" | "in progress" => Some(IncidentState::InProgress),
            "cerrada" | "closed" => Some(IncidentState::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for IncidentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incidencia registrada sobre un vehículo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub kind: RepairKind,
    pub priority: Priority,
    pub description: String,
    pub state: IncidentState,
    /// Mecánicos asignados (referencias, no propiedad)
    pub mechanics: BTreeSet<MechanicId>,
    pub opened_at: DateTime<Utc>,
}

impl Incident {
    pub fn new(id: IncidentId, request: CreateIncidentRequest) -> Self {
        Self {
            id,
            kind: request.kind,
            priority: request.priority,
            description: request.description,
            state: IncidentState::Open,
            mechanics: BTreeSet::new(),
            opened_at: Utc::now(),
        }
    }

    /// Devuelve `false` si el mecánico ya estaba asignado
    pub fn assign_mechanic(&mut self, mechanic_id: MechanicId) -> bool {
        self.mechanics.insert(mechanic_id)
    }

    pub fn unassign_mechanic(&mut self, mechanic_id: MechanicId) -> bool {
        self.mechanics.remove(&mechanic_id)
    }

    pub fn set_state(&mut self, state: IncidentState) {
        self.state = state;
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}

/// Request para crear una incidencia
#[derive(Debug, Clone)]
pub struct CreateIncidentRequest {
    pub kind: RepairKind,
    pub priority: Priority,
    pub description: String,
}

/// Request para modificar una incidencia existente
#[derive(Debug, Clone)]
pub struct UpdateIncidentRequest {
    pub kind: RepairKind,
    pub priority: Priority,
    pub description: String,
}

/// Incidencia para listados, con su vehículo y propietario
#[derive(Debug, Clone, Serialize)]
pub struct IncidentListResponse {
    pub plate: String,
    pub owner_name: String,
    pub incident: Incident,
}

/// Contador global de incidencias: los ids nunca se reutilizan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentSequence {
    next: IncidentId,
}

impl IncidentSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> IncidentId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IncidentSequence {
    fn default() -> Self {
        Self::new()
    }
}
