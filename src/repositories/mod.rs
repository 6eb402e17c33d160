//! Repositorios en memoria
//!
//! Almacén de entidades del taller con búsqueda por identidad.

pub mod client_repository;
pub mod mechanic_repository;

pub use client_repository::ClientRepository;
pub use mechanic_repository::MechanicRepository;
