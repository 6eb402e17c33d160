use crate::models::{Client, ClientId, CreateClientRequest, UpdateClientRequest, Vehicle};
use crate::utils::errors::{duplicate_error, not_found_error, ShopResult};

/// Clientes registrados, con sus vehículos anidados
#[derive(Debug, Default)]
pub struct ClientRepository {
    clients: Vec<Client>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, request: CreateClientRequest) -> ShopResult<&Client> {
        if self.exists(request.id) {
            return Err(duplicate_error("un cliente", request.id));
        }

        let index = self.clients.len();
        self.clients.push(Client::new(request));
        Ok(&self.clients[index])
    }

    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn exists(&self, id: ClientId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn find_by_id(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id == id)
    }

    pub fn update(&mut self, id: ClientId, request: UpdateClientRequest) -> ShopResult<&Client> {
        let client = self
            .find_by_id_mut(id)
            .ok_or_else(|| not_found_error("Cliente", id))?;

        client.name = request.name;
        client.phone = request.phone;
        client.email = request.email;
        Ok(&*client)
    }

    /// Elimina el cliente junto con sus vehículos e incidencias
    pub fn delete(&mut self, id: ClientId) -> ShopResult<Client> {
        let index = self
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found_error("Cliente", id))?;

        Ok(self.clients.remove(index))
    }

    // --- Vehículos (anidados en su propietario)

    /// Busca un vehículo por matrícula en todos los clientes
    pub fn find_vehicle(&self, plate: &str) -> Option<(&Client, &Vehicle)> {
        self.clients
            .iter()
            .find_map(|c| c.vehicle(plate).map(|v| (c, v)))
    }

    pub fn find_vehicle_mut(&mut self, plate: &str) -> Option<&mut Vehicle> {
        self.clients.iter_mut().find_map(|c| c.vehicle_mut(plate))
    }

    pub fn plate_exists(&self, plate: &str) -> bool {
        self.find_vehicle(plate).is_some()
    }

    pub fn add_vehicle(&mut self, owner_id: ClientId, vehicle: Vehicle) -> ShopResult<&Vehicle> {
        if !self.exists(owner_id) {
            return Err(not_found_error("Cliente", owner_id));
        }
        if self.plate_exists(&vehicle.plate) {
            return Err(duplicate_error("un vehículo", &vehicle.plate));
        }

        let owner = self
            .find_by_id_mut(owner_id)
            .ok_or_else(|| not_found_error("Cliente", owner_id))?;

        let index = owner.vehicles.len();
        owner.vehicles.push(vehicle);
        Ok(&owner.vehicles[index])
    }

    /// Quita el vehículo de su propietario y lo devuelve
    pub fn remove_vehicle(&mut self, plate: &str) -> ShopResult<Vehicle> {
        for client in &mut self.clients {
            if let Some(pos) = client.vehicles.iter().position(|v| v.plate == plate) {
                return Ok(client.vehicles.remove(pos));
            }
        }
        Err(not_found_error("Vehículo", plate))
    }

    /// Todos los vehículos con su propietario, en orden de registro
    pub fn vehicles(&self) -> impl Iterator<Item = (&Client, &Vehicle)> {
        self.clients
            .iter()
            .flat_map(|c| c.vehicles.iter().map(move |v| (c, v)))
    }

    pub fn vehicles_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.clients.iter_mut().flat_map(|c| c.vehicles.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateVehicleRequest;
    use crate::utils::errors::ShopError;

    fn client(id: ClientId, name: &str) -> CreateClientRequest {
        CreateClientRequest {
            id,
            name: name.to_string(),
            phone: "600000000".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn vehicle(owner_id: ClientId, plate: &str) -> Vehicle {
        Vehicle::new(CreateVehicleRequest {
            owner_id,
            plate: plate.to_string(),
            brand: "Seat".to_string(),
            model: "Ibiza".to_string(),
            entry_date: "2024-03-01".to_string(),
            exit_date: "2024-03-05".to_string(),
        })
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let mut repo = ClientRepository::new();
        repo.create(client(7, "Ana")).unwrap();

        let err = repo.create(client(7, "Otra")).unwrap_err();
        assert!(matches!(err, ShopError::DuplicateId { .. }));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_and_delete() {
        let mut repo = ClientRepository::new();
        repo.create(client(1, "Ana")).unwrap();

        let updated = repo
            .update(
                1,
                UpdateClientRequest {
                    name: "Ana María".to_string(),
                    phone: "611111111".to_string(),
                    email: "ana@taller.es".to_string(),
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Ana María");

        assert!(matches!(
            repo.update(
                9,
                UpdateClientRequest {
                    name: String::new(),
                    phone: String::new(),
                    email: String::new(),
                }
            ),
            Err(ShopError::NotFound { .. })
        ));

        let removed = repo.delete(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(repo.is_empty());
        assert!(matches!(repo.delete(1), Err(ShopError::NotFound { .. })));
    }

    #[test]
    fn test_vehicle_lookup_across_clients() {
        let mut repo = ClientRepository::new();
        repo.create(client(1, "Ana")).unwrap();
        repo.create(client(2, "Luis")).unwrap();
        repo.add_vehicle(1, vehicle(1, "1111AAA")).unwrap();
        repo.add_vehicle(2, vehicle(2, "2222BBB")).unwrap();

        let (owner, found) = repo.find_vehicle("2222BBB").unwrap();
        assert_eq!(owner.id, 2);
        assert_eq!(found.plate, "2222BBB");
        assert_eq!(repo.vehicles().count(), 2);
        assert!(repo.find_vehicle("0000ZZZ").is_none());
    }

    #[test]
    fn test_plates_are_unique_across_clients() {
        let mut repo = ClientRepository::new();
        repo.create(client(1, "Ana")).unwrap();
        repo.create(client(2, "Luis")).unwrap();
        repo.add_vehicle(1, vehicle(1, "1111AAA")).unwrap();

        let err = repo.add_vehicle(2, vehicle(2, "1111AAA")).unwrap_err();
        assert!(matches!(err, ShopError::DuplicateId { .. }));

        let err = repo.add_vehicle(5, vehicle(5, "3333CCC")).unwrap_err();
        assert!(matches!(err, ShopError::NotFound { .. }));
    }

    #[test]
    fn test_remove_vehicle() {
        let mut repo = ClientRepository::new();
        repo.create(client(1, "Ana")).unwrap();
        repo.add_vehicle(1, vehicle(1, "1111AAA")).unwrap();

        let removed = repo.remove_vehicle("1111AAA").unwrap();
        assert_eq!(removed.plate, "1111AAA");
        assert!(repo.find_by_id(1).unwrap().vehicles.is_empty());
        assert!(repo.remove_vehicle("1111AAA").is_err());
    }
}
