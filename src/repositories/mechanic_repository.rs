use crate::models::{CreateMechanicRequest, Mechanic, MechanicId, UpdateMechanicRequest};
use crate::utils::errors::{duplicate_error, not_found_error, ShopResult};

/// Plantilla de mecánicos, activos o de baja
#[derive(Debug, Default)]
pub struct MechanicRepository {
    mechanics: Vec<Mechanic>,
}

impl MechanicRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, request: CreateMechanicRequest) -> ShopResult<&Mechanic> {
        if self.exists(request.id) {
            return Err(duplicate_error("un mecánico", request.id));
        }

        let index = self.mechanics.len();
        self.mechanics.push(Mechanic::new(request));
        Ok(&self.mechanics[index])
    }

    pub fn list(&self) -> &[Mechanic] {
        &self.mechanics
    }

    /// Tamaño de la plantilla (incluye mecánicos de baja)
    pub fn len(&self) -> usize {
        self.mechanics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mechanics.is_empty()
    }

    pub fn exists(&self, id: MechanicId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn find_by_id(&self, id: MechanicId) -> Option<&Mechanic> {
        self.mechanics.iter().find(|m| m.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: MechanicId) -> Option<&mut Mechanic> {
        self.mechanics.iter_mut().find(|m| m.id == id)
    }

    /// Mecánico existente y activo
    pub fn find_available(&self, id: MechanicId) -> Option<&Mechanic> {
        self.find_by_id(id).filter(|m| m.is_available())
    }

    pub fn active(&self) -> impl Iterator<Item = &Mechanic> {
        self.mechanics.iter().filter(|m| m.is_available())
    }

    pub fn update(
        &mut self,
        id: MechanicId,
        request: UpdateMechanicRequest,
    ) -> ShopResult<&Mechanic> {
        let mechanic = self
            .find_by_id_mut(id)
            .ok_or_else(|| not_found_error("Mecánico", id))?;

        mechanic.name = request.name;
        mechanic.specialty = request.specialty;
        mechanic.years_experience = request.years_experience;
        Ok(&*mechanic)
    }

    pub fn delete(&mut self, id: MechanicId) -> ShopResult<Mechanic> {
        let index = self
            .mechanics
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| not_found_error("Mecánico", id))?;

        Ok(self.mechanics.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepairKind;
    use crate::utils::errors::ShopError;

    fn mechanic(id: MechanicId, name: &str) -> CreateMechanicRequest {
        CreateMechanicRequest {
            id,
            name: name.to_string(),
            specialty: RepairKind::Mechanical,
            years_experience: 3,
        }
    }

    #[test]
    fn test_new_mechanics_are_active() {
        let mut repo = MechanicRepository::new();
        let created = repo.create(mechanic(1, "Laura")).unwrap();
        assert!(created.active);
        assert_eq!(repo.active().count(), 1);
    }

    #[test]
    fn test_duplicate_id() {
        let mut repo = MechanicRepository::new();
        repo.create(mechanic(1, "Laura")).unwrap();
        assert!(matches!(
            repo.create(mechanic(1, "Pedro")),
            Err(ShopError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_find_available_skips_inactive() {
        let mut repo = MechanicRepository::new();
        repo.create(mechanic(1, "Laura")).unwrap();
        repo.find_by_id_mut(1).unwrap().set_active(false);

        assert!(repo.find_by_id(1).is_some());
        assert!(repo.find_available(1).is_none());
        assert!(repo.find_available(2).is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_and_delete() {
        let mut repo = MechanicRepository::new();
        repo.create(mechanic(1, "Laura")).unwrap();

        let updated = repo
            .update(
                1,
                UpdateMechanicRequest {
                    name: "Laura G.".to_string(),
                    specialty: RepairKind::Electrical,
                    years_experience: 4,
                },
            )
            .unwrap();
        assert_eq!(updated.specialty, RepairKind::Electrical);
        assert!(updated.active);

        assert_eq!(repo.delete(1).unwrap().name, "Laura G.");
        assert!(repo.is_empty());
        assert!(matches!(repo.delete(1), Err(ShopError::NotFound { .. })));
    }
}
