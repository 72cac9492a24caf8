pub mod reservation;
pub mod schedule;

pub use reservation::*;
pub use schedule::*;
