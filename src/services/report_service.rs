//! Informe del estado del taller
//!
//! Resuelve los ids de cada plaza ocupada contra los repositorios para mostrar
//! nombres, y exporta una instantánea en JSON (solo lectura, sin persistencia).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{BayId, Client, Mechanic};
use crate::state::ShopState;
use crate::utils::errors::ShopResult;

/// Línea del informe por plaza
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BayStatusLine {
    pub bay_id: BayId,
    pub occupied: bool,
    pub plate: Option<String>,
    pub client_name: Option<String>,
    pub mechanic_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShopStatusReport {
    pub occupied: usize,
    pub free: usize,
    pub total: usize,
    pub occupancy_pct: u32,
    pub bays: Vec<BayStatusLine>,
}

/// Instantánea completa del taller
#[derive(Debug, Serialize)]
pub struct ShopSnapshot<'a> {
    pub generated_at: DateTime<Utc>,
    pub status: ShopStatusReport,
    pub mechanics: &'a [Mechanic],
    pub clients: &'a [Client],
}

pub struct ReportService<'a> {
    state: &'a ShopState,
}

impl<'a> ReportService<'a> {
    pub fn new(state: &'a ShopState) -> Self {
        Self { state }
    }

    pub fn shop_status(&self) -> ShopStatusReport {
        let status = self.state.bays.status();
        let total = status.total();

        let bays = self
            .state
            .bays
            .bays()
            .iter()
            .map(|bay| {
                let occupancy = bay.occupancy.as_ref();
                BayStatusLine {
                    bay_id: bay.id,
                    occupied: bay.is_occupied(),
                    plate: bay.plate().map(str::to_string),
                    client_name: occupancy
                        .and_then(|o| self.state.clients.find_by_id(o.client_id))
                        .map(|c| c.name.clone()),
                    mechanic_name: occupancy
                        .and_then(|o| self.state.mechanics.find_by_id(o.mechanic_id))
                        .map(|m| m.name.clone()),
                }
            })
            .collect();

        ShopStatusReport {
            occupied: status.occupied,
            free: status.free,
            total,
            occupancy_pct: occupancy_percentage(status.occupied, total),
            bays,
        }
    }

    pub fn snapshot(&self) -> ShopSnapshot<'a> {
        ShopSnapshot {
            generated_at: Utc::now(),
            status: self.shop_status(),
            mechanics: self.state.mechanics.list(),
            clients: self.state.clients.list(),
        }
    }

    pub fn snapshot_json(&self) -> ShopResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

/// Porcentaje de ocupación redondeado; 0 si no hay plazas
pub fn occupancy_percentage(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((occupied as f64 / total as f64) * 100.0).round() as u32
}
