//! Canto connection management

pub mod ports;
pub mod service;

pub use service::CantoService;
