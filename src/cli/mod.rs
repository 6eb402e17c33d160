//! Interfaz de consola del taller

pub mod console;
pub mod menu;

pub use console::Console;
pub use menu::ShopMenu;
