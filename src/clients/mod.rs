//! Typed client handles for talking to running services.

#[macro_use]
mod macros;
pub mod reservation_client;

pub use reservation_client::*;
