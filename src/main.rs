use std::io;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{debug, error, info};

use repair_shop::cli::{Console, ShopMenu};
use repair_shop::config::EnvironmentConfig;
use repair_shop::state::ShopState;

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Los logs van a stderr para no mezclarse con los menús
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    if !config.use_colors {
        colored::control::set_override(false);
    }

    info!("🔧 Gestión de plazas del taller");
    debug!(
        environment = %config.environment,
        seed = config.seed_demo_data,
        "Configuración cargada"
    );

    let mut state = ShopState::new();
    if config.seed_demo_data {
        state.initialize_demo_roster();
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut menu = ShopMenu::new(&mut state, console);

    // Solo los errores de consola llegan hasta aquí (p. ej. stdin cerrado)
    if let Err(e) = menu.run() {
        error!("❌ Error de consola: {}", e);
        return Err(e).context("La sesión interactiva terminó de forma inesperada");
    }

    info!("👋 Programa finalizado");
    Ok(())
}
