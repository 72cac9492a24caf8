use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::booking::SeatOccupancy;
use crate::domain::{Reservation, ReservationFields, ReservationId, Seat};
use crate::reservation_actor::ReservationError;

/// Client for the reservation service. Cheap to clone; the service stops once
/// every clone has been dropped.
#[derive(Clone)]
pub struct ReservationClient {
    inner: ResourceClient<Reservation>,
}

impl ReservationClient {
    pub fn new(inner: ResourceClient<Reservation>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn is_seat_taken(&self, seat: Seat) -> Result<bool, ReservationError> {
        debug!("Sending request");
        let reservations = self.inner.list().await?;
        Ok(reservations.as_slice().is_seat_taken(seat))
    }
}

client_method!(ReservationClient => fn create_reservation(fields: ReservationFields) -> Reservation as create, Error = ReservationError);
client_method!(ReservationClient => fn update_reservation(id: ReservationId, fields: ReservationFields) -> Reservation as update, Error = ReservationError);
client_method!(ReservationClient => fn delete_reservation(id: ReservationId) -> Option<Reservation> as delete, Error = ReservationError);
client_method!(ReservationClient => fn get_reservation(id: ReservationId) -> Option<Reservation> as get, Error = ReservationError);
client_method!(ReservationClient => fn list_reservations() -> Vec<Reservation> as list, Error = ReservationError);
