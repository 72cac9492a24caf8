use crate::domain::{DepartureTime, Reservation, Seat};
use crate::reservation_actor::ReservationStore;

/// Anything that can answer whether a seat is already held.
pub trait SeatOccupancy {
    fn is_seat_taken(&self, seat: Seat) -> bool;
}

impl SeatOccupancy for ReservationStore {
    fn is_seat_taken(&self, seat: Seat) -> bool {
        ReservationStore::is_seat_taken(self, seat)
    }
}

/// A snapshot such as the one returned by `ReservationClient::list`.
impl SeatOccupancy for [Reservation] {
    fn is_seat_taken(&self, seat: Seat) -> bool {
        self.iter().any(|r| r.seat == Some(seat))
    }
}

/// Single-seat selection. Clicking a held seat does nothing, clicking the
/// selected seat clears it, and clicking any other free seat selects it.
pub fn toggle_seat_selection<S>(current: Option<Seat>, clicked: Seat, occupancy: &S) -> Option<Seat>
where
    S: SeatOccupancy + ?Sized,
{
    if occupancy.is_seat_taken(clicked) {
        return current;
    }
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

pub fn select_time(time: DepartureTime) -> DepartureTime {
    time
}
