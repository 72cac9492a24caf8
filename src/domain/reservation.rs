use std::fmt;

use super::{DepartureTime, Seat};

/// Store-assigned identifier of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReservationId(pub u64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents one passenger's booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub destination: String,
    pub time: Option<DepartureTime>,
    pub seat: Option<Seat>,
}

/// The replaceable fields of a reservation. Used both to create one and as a
/// full replacement on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFields {
    pub name: String,
    pub destination: String,
    pub time: Option<DepartureTime>,
    pub seat: Option<Seat>,
}

impl ReservationFields {
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        time: Option<DepartureTime>,
        seat: Option<Seat>,
    ) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            time,
            seat,
        }
    }
}

impl Reservation {
    pub fn fields(&self) -> ReservationFields {
        ReservationFields {
            name: self.name.clone(),
            destination: self.destination.clone(),
            time: self.time,
            seat: self.seat,
        }
    }
}
