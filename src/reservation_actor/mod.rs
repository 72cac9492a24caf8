//! Reservation rules (field validation and one reservation per seat) and the
//! synchronous `ReservationStore` built on them.

pub mod entity;
pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
