//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod reservation_system;
pub mod telemetry;

pub use config::*;
pub use reservation_system::*;
pub use telemetry::*;
