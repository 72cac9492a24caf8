use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceStore;
use crate::domain::{DepartureTime, Reservation, ReservationFields, ReservationId, Seat};
use super::ReservationError;

/// Monotonic id generator starting at 1.
pub fn sequential_ids() -> impl FnMut() -> ReservationId + Send + 'static {
    let mut next = 1;
    move || {
        let id = ReservationId(next);
        next += 1;
        id
    }
}

/// In-memory reservations for one bus, keyed by a store-assigned id.
///
/// At most one reservation holds any given seat. Reservations are kept in
/// insertion order and updates never move them.
pub struct ReservationStore {
    inner: ResourceStore<Reservation>,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::with_id_generator(sequential_ids())
    }

    pub fn with_id_generator(next_id: impl FnMut() -> ReservationId + Send + 'static) -> Self {
        Self {
            inner: ResourceStore::new(next_id),
        }
    }

    /// Consumes the wrapper, handing the generic store to a `ResourceActor`.
    pub fn into_inner(self) -> ResourceStore<Reservation> {
        self.inner
    }

    /// Creates a reservation with a fresh id and appends it.
    ///
    /// # Errors
    /// `ValidationError` for an empty name or destination, `SeatConflict` when
    /// `seat` is already held. The store is unchanged on error.
    #[instrument(skip(self, name, destination))]
    pub fn create(
        &mut self,
        name: impl Into<String>,
        destination: impl Into<String>,
        time: Option<DepartureTime>,
        seat: Option<Seat>,
    ) -> Result<Reservation, ReservationError> {
        self.create_from(ReservationFields::new(name, destination, time, seat))
    }

    pub fn create_from(&mut self, fields: ReservationFields) -> Result<Reservation, ReservationError> {
        match self.inner.create(fields) {
            Ok(reservation) => {
                info!(reservation_id = %reservation.id, "Reservation created");
                Ok(reservation)
            }
            Err(e) => {
                warn!(error = %e, "Create rejected");
                Err(e)
            }
        }
    }

    /// Replaces every field of reservation `id` in place.
    ///
    /// # Errors
    /// `NotFound` when no reservation has `id`, otherwise the same errors as
    /// [`ReservationStore::create`]. The reservation's own seat is never a
    /// conflict.
    #[instrument(skip(self, name, destination), fields(reservation_id = %id))]
    pub fn update(
        &mut self,
        id: ReservationId,
        name: impl Into<String>,
        destination: impl Into<String>,
        time: Option<DepartureTime>,
        seat: Option<Seat>,
    ) -> Result<Reservation, ReservationError> {
        self.update_from(id, ReservationFields::new(name, destination, time, seat))
    }

    pub fn update_from(
        &mut self,
        id: ReservationId,
        fields: ReservationFields,
    ) -> Result<Reservation, ReservationError> {
        match self.inner.update(id, fields) {
            Ok(reservation) => {
                info!(reservation_id = %id, "Reservation updated");
                Ok(reservation)
            }
            Err(e) => {
                warn!(reservation_id = %id, error = %e, "Update rejected");
                Err(e)
            }
        }
    }

    /// Removes reservation `id` if present. Deleting an unknown id is a no-op.
    #[instrument(skip(self), fields(reservation_id = %id))]
    pub fn delete(&mut self, id: ReservationId) -> Option<Reservation> {
        let removed = self.inner.delete(id);
        match &removed {
            Some(_) => info!("Reservation deleted"),
            None => debug!("Nothing to delete"),
        }
        removed
    }

    pub fn is_seat_taken(&self, seat: Seat) -> bool {
        self.holder_of(seat).is_some()
    }

    pub fn holder_of(&self, seat: Seat) -> Option<&Reservation> {
        self.inner.list().iter().find(|r| r.seat == Some(seat))
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.inner.get(id)
    }

    /// All reservations in insertion order.
    pub fn list(&self) -> &[Reservation] {
        self.inner.list()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
