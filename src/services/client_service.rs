use tracing::{debug, info};

use crate::models::{Client, ClientId, CreateClientRequest, UpdateClientRequest};
use crate::services::bay_pool::BayHolder;
use crate::state::ShopState;
use crate::utils::errors::{not_found_error, ShopResult};

/// Resultado de eliminar un cliente
#[derive(Debug)]
pub struct DeletedClient {
    pub client: Client,
    pub released_bays: usize,
}

/// Servicio de gestión de clientes
pub struct ClientService<'a> {
    state: &'a mut ShopState,
}

impl<'a> ClientService<'a> {
    pub fn new(state: &'a mut ShopState) -> Self {
        Self { state }
    }

    pub fn create_client(&mut self, request: CreateClientRequest) -> ShopResult<&Client> {
        let client = self.state.clients.create(request)?;
        info!(client_id = client.id, "👤 Cliente creado");
        Ok(client)
    }

    pub fn list_clients(&self) -> &[Client] {
        self.state.clients.list()
    }

    pub fn find_client(&self, id: ClientId) -> ShopResult<&Client> {
        debug!(client_id = id, "Buscando cliente");
        self.state
            .clients
            .find_by_id(id)
            .ok_or_else(|| not_found_error("Cliente", id))
    }

    pub fn update_client(
        &mut self,
        id: ClientId,
        request: UpdateClientRequest,
    ) -> ShopResult<&Client> {
        let client = self.state.clients.update(id, request)?;
        info!(client_id = id, "✏️ Cliente modificado");
        Ok(client)
    }

    /// Libera las plazas del cliente antes de eliminarlo
    pub fn delete_client(&mut self, id: ClientId) -> ShopResult<DeletedClient> {
        if !self.state.clients.exists(id) {
            return Err(not_found_error("Cliente", id));
        }

        let released_bays = self.state.bays.release_bays_of(BayHolder::Client(id));
        let client = self.state.clients.delete(id)?;

        info!(
            client_id = id,
            released_bays,
            vehicles = client.vehicles.len(),
            "🗑️ Cliente eliminado"
        );
        Ok(DeletedClient {
            client,
            released_bays,
        })
    }
}
