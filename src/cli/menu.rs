//! Menús del taller
//!
//! Cada opción recoge datos por consola y delega en los servicios. Los errores
//! recuperables se muestran y se vuelve al menú; el fin de la entrada sale.

use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::models::{
    ClientId, CreateClientRequest, CreateIncidentRequest, CreateMechanicRequest,
    CreateVehicleRequest, IncidentState, MechanicId, Priority, RepairKind, UpdateClientRequest,
    UpdateIncidentRequest, UpdateMechanicRequest, UpdateVehicleRequest,
};
use crate::services::{
    AllocationService, ClientService, IncidentService, MechanicService, RecomputeOutcome,
    ReportService, VehicleService,
};
use crate::state::ShopState;
use crate::utils::errors::{
    duplicate_error, invalid_selection_error, not_found_error, ShopError, ShopResult,
};
use crate::utils::text::normalize_plate;

const MAIN_MENU: &[&str] = &[
    "1. Gestionar clientes",
    "2. Gestionar vehículos",
    "3. Gestionar incidencias",
    "4. Gestionar mecánicos",
    "5. Asignar vehículo a plaza",
    "6. Consultar estado del taller",
    "7. Registrar salida de un vehículo",
    "8. Listar vehículos asignados a un mecánico",
    "9. Exportar estado del taller (JSON)",
    "0. Salir",
];

const CLIENTS_MENU: &[&str] = &[
    "1. Crear cliente",
    "2. Visualizar clientes",
    "3. Modificar cliente",
    "4. Eliminar cliente",
    "0. Volver",
];

const VEHICLES_MENU: &[&str] = &[
    "1. Crear vehículo",
    "2. Visualizar vehículos",
    "3. Modificar vehículo",
    "4. Eliminar vehículo",
    "5. Registrar incidencia a un vehículo",
    "6. Consultar incidencia de un vehículo",
    "0. Volver",
];

const INCIDENTS_MENU: &[&str] = &[
    "1. Crear incidencia (vehículo)",
    "2. Visualizar incidencias",
    "3. Modificar incidencia",
    "4. Eliminar incidencia",
    "5. Cambiar estado de incidencia",
    "6. Asignar mecánico a incidencia",
    "0. Volver",
];

const MECHANICS_MENU: &[&str] = &[
    "1. Crear mecánico",
    "2. Visualizar mecánicos",
    "3. Modificar mecánico",
    "4. Eliminar mecánico",
    "5. Dar de alta/baja a un mecánico",
    "0. Volver",
];

const KIND_PROMPT: &str = "Tipo (mecánica/eléctrica/carrocería): ";
const PRIORITY_PROMPT: &str = "Prioridad (baja/media/alta): ";
const SPECIALTY_PROMPT: &str = "Especialidad (mecánica/eléctrica/carrocería): ";

/// Menú principal y submenús sobre un estado del taller
pub struct ShopMenu<'a, R, W> {
    state: &'a mut ShopState,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> ShopMenu<'a, R, W> {
    pub fn new(state: &'a mut ShopState, console: Console<R, W>) -> Self {
        Self { state, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Bucle principal. Solo termina con "Salir" o con un error de consola.
    pub fn run(&mut self) -> ShopResult<()> {
        loop {
            self.show_menu("MENÚ PRINCIPAL", MAIN_MENU)?;
            let result = match self.console.prompt_number::<u32>("Seleccione una opción: ") {
                Ok(1) => self.clients_menu(),
                Ok(2) => self.vehicles_menu(),
                Ok(3) => self.incidents_menu(),
                Ok(4) => self.mechanics_menu(),
                Ok(5) => self.assign_vehicle_to_bay(),
                Ok(6) => self.show_shop_status(),
                Ok(7) => self.register_vehicle_exit(),
                Ok(8) => self.list_vehicles_of_mechanic(),
                Ok(9) => self.export_snapshot(),
                Ok(0) => {
                    self.console.println("Saliendo del programa...")?;
                    return Ok(());
                }
                Ok(other) => Err(invalid_selection_error(&other.to_string())),
                Err(e) => Err(e),
            };
            self.recover(result)?;
        }
    }

    fn show_menu(&mut self, title: &str, options: &[&str]) -> ShopResult<()> {
        self.console.title(title)?;
        for option in options {
            self.console.println(option)?;
        }
        Ok(())
    }

    /// Muestra los errores recuperables; propaga el resto
    fn recover(&mut self, result: ShopResult<()>) -> ShopResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is_recoverable() => self.console.error(&e),
            Err(e) => Err(e),
        }
    }

    fn report_recompute(&mut self, outcome: RecomputeOutcome) -> ShopResult<()> {
        if outcome.discarded_assignments > 0 {
            self.console.warning(format!(
                "Al recalcular las plazas se han perdido {} asignación(es) vigente(s).",
                outcome.discarded_assignments
            ))?;
        }
        Ok(())
    }

    // --- Submenús

    fn clients_menu(&mut self) -> ShopResult<()> {
        loop {
            self.show_menu("GESTIÓN DE CLIENTES", CLIENTS_MENU)?;
            let result = match self.console.prompt_number::<u32>("Opción: ") {
                Ok(1) => self.create_client(),
                Ok(2) => self.list_clients(),
                Ok(3) => self.update_client(),
                Ok(4) => self.delete_client(),
                Ok(0) => return Ok(()),
                Ok(other) => Err(invalid_selection_error(&other.to_string())),
                Err(e) => Err(e),
            };
            self.recover(result)?;
        }
    }

    fn vehicles_menu(&mut self) -> ShopResult<()> {
        loop {
            self.show_menu("GESTIÓN DE VEHÍCULOS", VEHICLES_MENU)?;
            let result = match self.console.prompt_number::<u32>("Opción: ") {
                Ok(1) => self.create_vehicle(),
                Ok(2) => self.list_vehicles(),
                Ok(3) => self.update_vehicle(),
                Ok(4) => self.delete_vehicle(),
                Ok(5) => self.register_incident(),
                Ok(6) => self.show_incident(),
                Ok(0) => return Ok(()),
                Ok(other) => Err(invalid_selection_error(&other.to_string())),
                Err(e) => Err(e),
            };
            self.recover(result)?;
        }
    }

    fn incidents_menu(&mut self) -> ShopResult<()> {
        loop {
            self.show_menu("GESTIÓN DE INCIDENCIAS", INCIDENTS_MENU)?;
            let result = match self.console.prompt_number::<u32>("Opción: ") {
                Ok(1) => self.register_incident(),
                Ok(2) => self.list_incidents(),
                Ok(3) => self.update_incident(),
                Ok(4) => self.delete_incident(),
                Ok(5) => self.change_incident_state(),
                Ok(6) => self.assign_mechanic_to_incident(),
                Ok(0) => return Ok(()),
                Ok(other) => Err(invalid_selection_error(&other.to_string())),
                Err(e) => Err(e),
            };
            self.recover(result)?;
        }
    }

    fn mechanics_menu(&mut self) -> ShopResult<()> {
        loop {
            self.show_menu("GESTIÓN DE MECÁNICOS", MECHANICS_MENU)?;
            let result = match self.console.prompt_number::<u32>("Opción: ") {
                Ok(1) => self.create_mechanic(),
                Ok(2) => self.list_mechanics(),
                Ok(3) => self.update_mechanic(),
                Ok(4) => self.delete_mechanic(),
                Ok(5) => self.change_mechanic_state(),
                Ok(0) => return Ok(()),
                Ok(other) => Err(invalid_selection_error(&other.to_string())),
                Err(e) => Err(e),
            };
            self.recover(result)?;
        }
    }

    // --- Clientes

    fn create_client(&mut self) -> ShopResult<()> {
        let id: ClientId = self.console.prompt_number("ID cliente: ")?;
        if self.state.clients.exists(id) {
            return Err(duplicate_error("un cliente", id));
        }
        let name = self.console.prompt("Nombre: ")?;
        let phone = self.console.prompt("Teléfono: ")?;
        let email = self.console.prompt("Email: ")?;

        ClientService::new(self.state).create_client(CreateClientRequest {
            id,
            name,
            phone,
            email,
        })?;
        self.console.success("Cliente creado.")
    }

    fn list_clients(&mut self) -> ShopResult<()> {
        let clients = self.state.clients.list();
        if clients.is_empty() {
            return self.console.println("No hay clientes.");
        }
        self.console.println("Listado de clientes:")?;
        for c in clients {
            self.console.println(format!(
                "- ID:{} | {} | Tel:{} | Email:{} | Vehículos:{}",
                c.id,
                c.name,
                c.phone,
                c.email,
                c.vehicles.len()
            ))?;
        }
        Ok(())
    }

    fn update_client(&mut self) -> ShopResult<()> {
        let id: ClientId = self.console.prompt_number("ID cliente a modificar: ")?;
        ClientService::new(self.state).find_client(id)?;
        let name = self.console.prompt("Nuevo nombre: ")?;
        let phone = self.console.prompt("Nuevo teléfono: ")?;
        let email = self.console.prompt("Nuevo email: ")?;

        let request = UpdateClientRequest { name, phone, email };
        ClientService::new(self.state).update_client(id, request)?;
        self.console.success("Cliente modificado.")
    }

    fn delete_client(&mut self) -> ShopResult<()> {
        let id: ClientId = self.console.prompt_number("ID cliente a eliminar: ")?;
        let deleted = ClientService::new(self.state).delete_client(id)?;
        self.console.success(format!(
            "Cliente eliminado ({} vehículo(s), {} plaza(s) liberada(s)).",
            deleted.client.vehicles.len(),
            deleted.released_bays
        ))
    }

    // --- Vehículos

    fn create_vehicle(&mut self) -> ShopResult<()> {
        let owner_id: ClientId = self.console.prompt_number("ID del cliente propietario: ")?;
        if !self.state.clients.exists(owner_id) {
            return Err(not_found_error("Cliente", owner_id));
        }
        let plate = normalize_plate(&self.console.prompt("Matrícula: ")?);
        if self.state.clients.plate_exists(&plate) {
            return Err(duplicate_error("un vehículo", &plate));
        }
        let brand = self.console.prompt("Marca: ")?;
        let model = self.console.prompt("Modelo: ")?;
        let entry_date = self.console.prompt("Fecha de entrada: ")?;
        let exit_date = self.console.prompt("Fecha de salida: ")?;

        VehicleService::new(self.state).create_vehicle(CreateVehicleRequest {
            owner_id,
            plate,
            brand,
            model,
            entry_date,
            exit_date,
        })?;
        self.console
            .success("Vehículo creado y asignado al cliente.")
    }

    fn list_vehicles(&mut self) -> ShopResult<()> {
        let vehicles = VehicleService::new(self.state).list_vehicles();
        if vehicles.is_empty() {
            return self.console.println("No hay vehículos registrados.");
        }
        for v in vehicles {
            let incident = match v.incident_state {
                Some(state) => format!("incidencia {}", state),
                None => "sin incidencia".to_string(),
            };
            self.console.println(format!(
                "- [{}] {} {} | Cliente:{} | {}",
                v.plate, v.brand, v.model, v.owner_name, incident
            ))?;
        }
        Ok(())
    }

    fn update_vehicle(&mut self) -> ShopResult<()> {
        let plate = self.console.prompt("Matrícula del vehículo a modificar: ")?;
        VehicleService::new(self.state).find_vehicle(&plate)?;
        let brand = self.console.prompt("Nueva marca: ")?;
        let model = self.console.prompt("Nuevo modelo: ")?;
        let entry_date = self.console.prompt("Nueva fecha de entrada: ")?;
        let exit_date = self.console.prompt("Nueva fecha de salida: ")?;

        let request = UpdateVehicleRequest {
            brand,
            model,
            entry_date,
            exit_date,
        };
        let mut service = VehicleService::new(self.state);
        let updated = service.update_vehicle(&plate, request)?;
        let message = format!("Vehículo {} modificado.", updated.plate);
        self.console.success(message)
    }

    fn delete_vehicle(&mut self) -> ShopResult<()> {
        let plate = self.console.prompt("Matrícula del vehículo a eliminar: ")?;
        let deleted = VehicleService::new(self.state).delete_vehicle(&plate)?;
        self.console.success(format!(
            "Vehículo {} de {} eliminado ({} plaza(s) liberada(s)).",
            deleted.vehicle.plate, deleted.owner_name, deleted.released_bays
        ))
    }

    // --- Incidencias

    fn register_incident(&mut self) -> ShopResult<()> {
        let plate = normalize_plate(&self.console.prompt("Matrícula del vehículo: ")?);
        let (owner_name, has_incident) = {
            let service = VehicleService::new(self.state);
            let (owner, vehicle) = service.find_vehicle(&plate)?;
            (owner.name.clone(), vehicle.incident().is_some())
        };
        if has_incident {
            return Err(ShopError::DuplicateIncident(plate));
        }

        let kind = self.console.prompt_choice(KIND_PROMPT, RepairKind::parse)?;
        let priority = self
            .console
            .prompt_choice(PRIORITY_PROMPT, Priority::parse)?;
        let description = self.console.prompt("Descripción: ")?;

        let request = CreateIncidentRequest {
            kind,
            priority,
            description,
        };
        let id = IncidentService::new(self.state)
            .register_incident(&plate, request)?
            .id;
        self.console.success(format!(
            "Incidencia registrada al vehículo {} del cliente {} (ID={}).",
            plate, owner_name, id
        ))
    }

    fn show_incident(&mut self) -> ShopResult<()> {
        let plate = self.console.prompt("Matrícula del vehículo: ")?;
        let line = {
            let service = IncidentService::new(self.state);
            let incident = service.get_incident(&plate)?;
            format!(
                "Incidencia ID:{} | Tipo:{} | Prioridad:{}{} | Estado:{} | \
                 Desc:{} | Mecánicos:{} | Abierta:{}",
                incident.id,
                incident.kind,
                incident.priority,
                if incident.is_high_priority() { " (!)" } else { "" },
                incident.state,
                incident.description,
                incident.mechanics.len(),
                incident.opened_at.format("%Y-%m-%d %H:%M")
            )
        };
        self.console.println(line)
    }

    fn list_incidents(&mut self) -> ShopResult<()> {
        let incidents = IncidentService::new(self.state).list_incidents();
        if incidents.is_empty() {
            return self.console.println("No hay incidencias registradas.");
        }
        for entry in incidents {
            self.console.println(format!(
                "- Vehículo [{}] de {} | IncID:{} | Tipo:{} | Prio:{} | Estado:{}",
                entry.plate, entry.owner_name, entry.incident.id, entry.incident.kind,
                entry.incident.priority, entry.incident.state
            ))?;
        }
        Ok(())
    }

    fn update_incident(&mut self) -> ShopResult<()> {
        let plate = self
            .console
            .prompt("Matrícula del vehículo con incidencia: ")?;
        IncidentService::new(self.state).get_incident(&plate)?;
        let kind = self.console.prompt_choice(KIND_PROMPT, RepairKind::parse)?;
        let priority = self
            .console
            .prompt_choice(PRIORITY_PROMPT, Priority::parse)?;
        let description = self.console.prompt("Nueva descripción: ")?;

        IncidentService::new(self.state).update_incident(
            &plate,
            UpdateIncidentRequest {
                kind,
                priority,
                description,
            },
        )?;
        self.console.success("Incidencia modificada.")
    }

    fn delete_incident(&mut self) -> ShopResult<()> {
        let plate = self
            .console
            .prompt("Matrícula del vehículo con incidencia a eliminar: ")?;
        let removed = IncidentService::new(self.state).delete_incident(&plate)?;
        self.console
            .success(format!("Incidencia {} eliminada del vehículo.", removed.id))
    }

    fn change_incident_state(&mut self) -> ShopResult<()> {
        let plate = self.console.prompt("Matrícula del vehículo: ")?;
        IncidentService::new(self.state).get_incident(&plate)?;
        let state = self.console.prompt_choice(
            "Nuevo estado (abierta/en proceso/cerrada): ",
            IncidentState::parse,
        )?;

        IncidentService::new(self.state).change_state(&plate, state)?;
        self.console.success("Estado actualizado.")
    }

    fn assign_mechanic_to_incident(&mut self) -> ShopResult<()> {
        let plate = self.console.prompt("Matrícula del vehículo: ")?;
        IncidentService::new(self.state).get_incident(&plate)?;
        let mechanic_id: MechanicId = self.console.prompt_number("ID del mecánico: ")?;

        if IncidentService::new(self.state).assign_mechanic(&plate, mechanic_id)? {
            self.console.success("Mecánico asignado a la incidencia.")
        } else {
            self.console
                .println("El mecánico ya estaba asignado a la incidencia.")
        }
    }

    // --- Mecánicos

    fn create_mechanic(&mut self) -> ShopResult<()> {
        let id: MechanicId = self.console.prompt_number("ID mecánico: ")?;
        if self.state.mechanics.exists(id) {
            return Err(duplicate_error("un mecánico", id));
        }
        let name = self.console.prompt("Nombre: ")?;
        let specialty = self
            .console
            .prompt_choice(SPECIALTY_PROMPT, RepairKind::parse)?;
        let years_experience: u32 = self.console.prompt_number("Años de experiencia: ")?;

        let outcome = MechanicService::new(self.state).create_mechanic(CreateMechanicRequest {
            id,
            name,
            specialty,
            years_experience,
        })?;
        self.console.success(format!(
            "Mecánico creado y plazas recalculadas (total: {}).",
            outcome.total_bays
        ))?;
        self.report_recompute(outcome)
    }

    fn list_mechanics(&mut self) -> ShopResult<()> {
        let mechanics = self.state.mechanics.list();
        if mechanics.is_empty() {
            return self.console.println("No hay mecánicos.");
        }
        for m in mechanics {
            self.console.println(format!(
                "- ID:{} | {} | {} | {} años | {}",
                m.id,
                m.name,
                m.specialty,
                m.years_experience,
                m.status_label()
            ))?;
        }
        Ok(())
    }

    fn update_mechanic(&mut self) -> ShopResult<()> {
        let id: MechanicId = self.console.prompt_number("ID del mecánico a modificar: ")?;
        MechanicService::new(self.state).find_mechanic(id)?;
        let name = self.console.prompt("Nuevo nombre: ")?;
        let specialty = self
            .console
            .prompt_choice(SPECIALTY_PROMPT, RepairKind::parse)?;
        let years_experience: u32 = self.console.prompt_number("Nuevos años de experiencia: ")?;

        MechanicService::new(self.state).update_mechanic(
            id,
            UpdateMechanicRequest {
                name,
                specialty,
                years_experience,
            },
        )?;
        self.console.success("Mecánico modificado.")
    }

    fn delete_mechanic(&mut self) -> ShopResult<()> {
        let id: MechanicId = self.console.prompt_number("ID del mecánico a eliminar: ")?;
        let deleted = MechanicService::new(self.state).delete_mechanic(id)?;
        self.console.success(format!(
            "Mecánico {} eliminado ({} plaza(s) liberada(s), {} incidencia(s) actualizada(s)); \
             plazas recalculadas (total: {}).",
            deleted.mechanic.name, deleted.released_bays, deleted.incidents_updated,
            deleted.recompute.total_bays
        ))?;
        self.report_recompute(deleted.recompute)
    }

    fn change_mechanic_state(&mut self) -> ShopResult<()> {
        let id: MechanicId = self.console.prompt_number("ID del mecánico: ")?;
        MechanicService::new(self.state).find_mechanic(id)?;
        let choice: u32 = self.console.prompt_number("1=Activar, 2=Dar de baja: ")?;
        let active = match choice {
            1 => true,
            2 => false,
            other => return Err(invalid_selection_error(&other.to_string())),
        };

        let outcome = MechanicService::new(self.state).set_active(id, active)?;
        self.console
            .success("Estado del mecánico actualizado y plazas recalculadas.")?;
        self.report_recompute(outcome)
    }

    // --- Plazas / estado del taller

    fn assign_vehicle_to_bay(&mut self) -> ShopResult<()> {
        if AllocationService::new(self.state).status().free == 0 {
            return Err(ShopError::NoFreeBay);
        }
        let plate = self.console.prompt("Matrícula del vehículo a asignar: ")?;

        self.console.println("Mecánicos disponibles:")?;
        for m in self.state.mechanics.active() {
            self.console
                .println(format!("- ID:{} | {} | {}", m.id, m.name, m.specialty))?;
        }
        let mechanic_id: MechanicId = self
            .console
            .prompt_number("ID del mecánico para asignar: ")?;

        let assignment =
            AllocationService::new(self.state).assign_vehicle_to_bay(&plate, mechanic_id)?;
        let mechanic_name = self
            .state
            .mechanics
            .find_by_id(mechanic_id)
            .map(|m| m.name.clone())
            .unwrap_or_default();
        self.console.success(format!(
            "Vehículo {} asignado a plaza #{} con mecánico {}. (Ocupadas:{}→{})",
            assignment.plate, assignment.bay_id, mechanic_name, assignment.before.occupied,
            assignment.after.occupied
        ))
    }

    fn show_shop_status(&mut self) -> ShopResult<()> {
        let report = ReportService::new(self.state).shop_status();
        self.console.println(format!(
            "Plazas ocupadas: {} | libres: {} | total: {} | ocupación: {}%",
            report.occupied, report.free, report.total, report.occupancy_pct
        ))?;
        for line in report.bays {
            if line.occupied {
                self.console.println(format!(
                    " - Plaza #{}: OCUPADA | Vehículo:{} | Cliente:{} | Mecánico:{}",
                    line.bay_id,
                    line.plate.unwrap_or_default(),
                    line.client_name.unwrap_or_default(),
                    line.mechanic_name.unwrap_or_default()
                ))?;
            } else {
                self.console
                    .println(format!(" - Plaza #{}: libre", line.bay_id))?;
            }
        }
        Ok(())
    }

    fn register_vehicle_exit(&mut self) -> ShopResult<()> {
        let plate = self.console.prompt("Matrícula del vehículo que sale: ")?;
        let released = AllocationService::new(self.state).release_vehicle(&plate)?;
        if released == 0 {
            self.console
                .println("El vehículo no ocupaba ninguna plaza.")
        } else {
            self.console.success(format!(
                "Salida registrada: {} plaza(s) liberada(s).",
                released
            ))
        }
    }

    fn list_vehicles_of_mechanic(&mut self) -> ShopResult<()> {
        let mechanic_id: MechanicId = self.console.prompt_number("ID del mecánico: ")?;
        let bays = AllocationService::new(self.state).vehicles_of_mechanic(mechanic_id)?;
        if bays.is_empty() {
            return self
                .console
                .println("El mecánico no tiene vehículos asignados.");
        }
        for bay in bays {
            self.console.println(format!(
                "- Plaza #{} | Vehículo:{} | Cliente ID:{}",
                bay.bay_id, bay.plate, bay.client_id
            ))?;
        }
        Ok(())
    }

    fn export_snapshot(&mut self) -> ShopResult<()> {
        let json = ReportService::new(self.state).snapshot_json()?;
        self.console.println(json)
    }
}
