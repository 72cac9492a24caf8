use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{ReservationId, Seat};

/// Errors that can occur during reservation operations.
///
/// Every variant is recoverable: a rejected operation leaves the store and
/// the booking form exactly as they were.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Reservation validation error: {0}")]
    ValidationError(String),
    #[error("Seat {seat} is already held by reservation {held_by}")]
    SeatConflict { seat: Seat, held_by: ReservationId },
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),
    #[error("No reservation id available: {0}")]
    IdExhausted(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<ReservationId>> for ReservationError {
    fn from(err: FrameworkError<ReservationId>) -> Self {
        match err {
            FrameworkError::NotFound(id) => ReservationError::NotFound(id),
            err @ FrameworkError::IdExhausted { .. } => ReservationError::IdExhausted(err.to_string()),
            other => ReservationError::ActorCommunicationError(other.to_string()),
        }
    }
}
