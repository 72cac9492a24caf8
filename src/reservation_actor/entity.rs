use crate::actor_framework::Entity;
use crate::domain::{Reservation, ReservationFields, ReservationId};
use super::ReservationError;

impl ReservationFields {
    /// Rejects an empty name or destination. Time and seat are optional;
    /// whitespace counts as text.
    pub fn validate(&self) -> Result<(), ReservationError> {
        if self.name.is_empty() {
            return Err(ReservationError::ValidationError("name is required".to_string()));
        }
        if self.destination.is_empty() {
            return Err(ReservationError::ValidationError("destination is required".to_string()));
        }
        Ok(())
    }
}

impl Entity for Reservation {
    type Id = ReservationId;
    type CreateParams = ReservationFields;
    type Patch = ReservationFields;
    type Error = ReservationError;

    fn id(&self) -> ReservationId {
        self.id
    }

    /// Creates a new Reservation from validated fields.
    ///
    /// # Errors
    /// `ValidationError` when the name or destination is empty.
    fn from_create_params(id: ReservationId, params: ReservationFields) -> Result<Self, ReservationError> {
        params.validate()?;
        Ok(Self {
            id,
            name: params.name,
            destination: params.destination,
            time: params.time,
            seat: params.seat,
        })
    }

    /// Replaces every mutable field. The id is never touched.
    fn on_update(&mut self, patch: ReservationFields) -> Result<(), ReservationError> {
        patch.validate()?;
        self.name = patch.name;
        self.destination = patch.destination;
        self.time = patch.time;
        self.seat = patch.seat;
        Ok(())
    }

    /// Two reservations may not hold the same seat. Unset seats never clash.
    fn check_unique(&self, other: &Self) -> Result<(), ReservationError> {
        match (self.seat, other.seat) {
            (Some(mine), Some(theirs)) if mine == theirs => Err(ReservationError::SeatConflict {
                seat: mine,
                held_by: other.id,
            }),
            _ => Ok(()),
        }
    }
}
