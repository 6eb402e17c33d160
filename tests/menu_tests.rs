use std::io::Cursor;

use repair_shop::cli::{Console, ShopMenu};
use repair_shop::{ShopError, ShopState};

/// Ejecuta el menú con la entrada indicada y devuelve el resultado y la salida
fn run_menu(state: &mut ShopState, script: &[&str]) -> (Result<(), ShopError>, String) {
    let mut input = script.join("\n");
    input.push('\n');
    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());

    let mut menu = ShopMenu::new(state, console);
    let result = menu.run();
    let output = String::from_utf8(menu.into_console().into_output()).unwrap();
    (result, output)
}

fn seeded_state() -> ShopState {
    let mut state = ShopState::new();
    state.initialize_demo_roster();
    state
}

#[test]
fn test_exit_immediately() {
    let mut state = seeded_state();
    let (result, output) = run_menu(&mut state, &["0"]);
    assert!(result.is_ok());
    assert!(output.contains("MENÚ PRINCIPAL"));
    assert!(output.contains("Saliendo del programa..."));
}

#[test]
fn test_invalid_selection_reprompts() {
    let mut state = seeded_state();
    let (result, output) = run_menu(&mut state, &["42", "hola", "0"]);
    assert!(result.is_ok());
    assert_eq!(output.matches("MENÚ PRINCIPAL").count(), 3);
    assert!(output.contains("Opción no válida: 42"));
    assert!(output.contains("Opción no válida: hola"));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut state = seeded_state();
    let (result, _) = run_menu(&mut state, &["1"]);
    assert!(matches!(result, Err(ShopError::InputClosed)));
}

#[test]
fn test_full_session_assigns_and_releases_a_bay() {
    let mut state = seeded_state();
    let script = [
        // Crear cliente
        "1", "1", "7", "Ana", "600111222", "ana@correo.es", "0",
        // Crear vehículo
        "2", "1", "7", "1234 abc", "Seat", "Ibiza", "2024-03-01", "", "0",
        // Asignar plaza
        "5", "1234ABC", "1",
        // Estado del taller
        "6",
        // Salida del vehículo
        "7", "1234ABC",
        "6",
        "0",
    ];
    let (result, output) = run_menu(&mut state, &script);

    assert!(result.is_ok());
    assert!(output.contains("Cliente creado."));
    assert!(output.contains("Vehículo creado y asignado al cliente."));
    assert!(output.contains("Vehículo 1234ABC asignado a plaza #1 con mecánico Laura."));
    assert!(output.contains("Plazas ocupadas: 1 | libres: 3 | total: 4 | ocupación: 25%"));
    assert!(output.contains("Plaza #1: OCUPADA | Vehículo:1234ABC | Cliente:Ana | Mecánico:Laura"));
    assert!(output.contains("Salida registrada: 1 plaza(s) liberada(s)."));
    assert!(output.contains("Plazas ocupadas: 0 | libres: 4 | total: 4 | ocupación: 0%"));
    assert_eq!(state.bays.status().occupied, 0);
}

#[test]
fn test_errors_are_shown_and_menu_continues() {
    let mut state = seeded_state();
    let script = [
        // Cliente duplicado: el error sale justo tras pedir el id
        "1", "1", "7", "Ana", "600", "ana@correo.es", "1", "7", "0",
        // Vehículo de un cliente inexistente
        "2", "1", "99", "0",
        // Asignar un vehículo inexistente
        "5", "0000ZZZ", "1",
        "0",
    ];
    let (result, output) = run_menu(&mut state, &script);

    assert!(result.is_ok());
    assert!(output.contains("Ya existe un cliente con identificador '7'"));
    assert!(output.contains("Cliente '99' no encontrado"));
    assert!(output.contains("Vehículo '0000ZZZ' no encontrado"));
    assert_eq!(state.clients.len(), 1);
}

#[test]
fn test_assign_lists_only_available_mechanics() {
    let mut state = seeded_state();
    let script = [
        "1", "1", "7", "Ana", "600", "ana@correo.es", "0",
        "2", "1", "7", "1234ABC", "Seat", "Ibiza", "2024-03-01", "", "0",
        // Pedro de baja antes de asignar
        "4", "5", "2", "2", "0",
        "5", "1234ABC", "1",
        "0",
    ];
    let (result, output) = run_menu(&mut state, &script);

    assert!(result.is_ok());
    let listing = output.split("Mecánicos disponibles:").nth(1).unwrap();
    let listing = listing
        .split("ID del mecánico para asignar")
        .next()
        .unwrap();
    assert!(listing.contains("- ID:1 | Laura | mecánica"));
    assert!(!listing.contains("Pedro"));
}

#[test]
fn test_assign_without_bays_does_not_ask_for_plate() {
    let mut state = ShopState::new();
    let (result, output) = run_menu(&mut state, &["5", "0"]);
    assert!(result.is_ok());
    assert!(!output.contains("Matrícula del vehículo a asignar"));
}

#[test]
fn test_deactivating_mechanic_warns_about_lost_assignments() {
    let mut state = seeded_state();
    let script = [
        "1", "1", "7", "Ana", "600", "ana@correo.es", "0",
        "2", "1", "7", "1234ABC", "Seat", "Ibiza", "2024-03-01", "", "0",
        "5", "1234ABC", "1",
        // Dar de baja a Laura
        "4", "5", "1", "2", "2", "0",
        "0",
    ];
    let (result, output) = run_menu(&mut state, &script);

    assert!(result.is_ok());
    assert!(output.contains("se han perdido 1 asignación(es)"));
    assert!(output.contains("| Laura | mecánica | 3 años | baja"));
    assert_eq!(state.bays.status().occupied, 0);
    assert_eq!(state.bays.len(), 4);
}

#[test]
fn test_incident_flow_through_vehicle_menu() {
    let mut state = seeded_state();
    let script = [
        "1", "1", "7", "Ana", "600", "ana@correo.es", "0",
        // Crear vehículo y registrar incidencia desde el menú de vehículos
        "2", "1", "7", "XYZ1", "Renault", "Clio", "2024-03-01", "",
        "5", "XYZ1", "eléctrica", "alta", "No arranca",
        "5", "XYZ1",
        "6", "XYZ1", "0",
        // Cambiar estado y asignar mecánico desde el menú de incidencias
        "3", "5", "XYZ1", "en proceso", "6", "XYZ1", "2", "2", "0",
        "0",
    ];
    let (result, output) = run_menu(&mut state, &script);

    assert!(result.is_ok());
    assert!(output.contains("Incidencia registrada al vehículo XYZ1 del cliente Ana (ID=1)."));
    assert!(output.contains("El vehículo XYZ1 ya tiene una incidencia"));
    assert!(output.contains("Prioridad:alta (!)"));
    assert!(output.contains("Mecánico asignado a la incidencia."));
    assert!(output.contains("IncID:1 | Tipo:eléctrica | Prio:alta | Estado:en proceso"));
}

#[test]
fn test_export_snapshot_prints_json() {
    let mut state = seeded_state();
    let (result, output) = run_menu(&mut state, &["9", "0"]);
    assert!(result.is_ok());
    assert!(output.contains("\"mechanics\""));
    assert!(output.contains("\"Laura\""));
}
