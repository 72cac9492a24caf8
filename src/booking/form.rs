use tracing::{debug, info, instrument, warn};

use crate::clients::ReservationClient;
use crate::domain::{DepartureTime, Reservation, ReservationFields, ReservationId, Seat};
use crate::reservation_actor::{ReservationError, ReservationStore};
use super::selection::{select_time, toggle_seat_selection, SeatOccupancy};

/// Unsaved values the user is typing or picking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub destination: String,
    pub time: Option<DepartureTime>,
    pub seat: Option<Seat>,
}

impl Draft {
    fn from_reservation(reservation: &Reservation) -> Self {
        let fields = reservation.fields();
        Self {
            name: fields.name,
            destination: fields.destination,
            time: fields.time,
            seat: fields.seat,
        }
    }

    fn to_fields(&self) -> ReservationFields {
        ReservationFields::new(self.name.clone(), self.destination.clone(), self.time, self.seat)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(ReservationId),
}

/// What a validated submit will do to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ReservationFields),
    Update(ReservationId, ReservationFields),
}

/// The reservation form: a draft plus the edit target.
///
/// `Idle` submits create a reservation, `Editing(id)` submits update it. Any
/// successful submit clears the draft and returns to `Idle`; a rejected one
/// leaves both untouched. There is no way back to `Idle` without submitting.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    draft: Draft,
    edit: EditState,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.draft.destination = destination.into();
    }

    pub fn select_time(&mut self, time: DepartureTime) {
        self.draft.time = Some(select_time(time));
    }

    pub fn click_seat<S: SeatOccupancy + ?Sized>(&mut self, seat: Seat, occupancy: &S) {
        self.draft.seat = toggle_seat_selection(self.draft.seat, seat, occupancy);
    }

    /// Loads `reservation` into the draft and targets it for the next submit.
    pub fn begin_edit(&mut self, reservation: &Reservation) {
        debug!(reservation_id = %reservation.id, "Editing reservation");
        self.draft = Draft::from_reservation(reservation);
        self.edit = EditState::Editing(reservation.id);
    }

    /// # Errors
    /// `NotFound` if the store has no reservation `id`; the form is unchanged.
    pub fn request_edit(&mut self, id: ReservationId, store: &ReservationStore) -> Result<(), ReservationError> {
        let reservation = store.get(id).ok_or(ReservationError::NotFound(id))?;
        self.begin_edit(reservation);
        Ok(())
    }

    /// Validates the draft and works out which store operation it maps to.
    pub fn prepare_submit(&self) -> Result<Submission, ReservationError> {
        let fields = self.draft.to_fields();
        fields.validate()?;
        Ok(match self.edit {
            EditState::Idle => Submission::Create(fields),
            EditState::Editing(id) => Submission::Update(id, fields),
        })
    }

    fn complete(&mut self, reservation: &Reservation) {
        info!(reservation_id = %reservation.id, "Submission accepted");
        self.draft = Draft::default();
        self.edit = EditState::Idle;
    }

    /// # Errors
    /// Whatever [`BookingForm::prepare_submit`] or the store rejects with.
    #[instrument(skip(self, store), fields(edit = ?self.edit))]
    pub fn submit(&mut self, store: &mut ReservationStore) -> Result<Reservation, ReservationError> {
        let result = match self.prepare_submit()? {
            Submission::Create(fields) => store.create_from(fields),
            Submission::Update(id, fields) => store.update_from(id, fields),
        };
        self.finish(result)
    }

    /// Same as [`BookingForm::submit`], against the running reservation service.
    #[instrument(skip(self, client), fields(edit = ?self.edit))]
    pub async fn submit_to(&mut self, client: &ReservationClient) -> Result<Reservation, ReservationError> {
        let result = match self.prepare_submit()? {
            Submission::Create(fields) => client.create_reservation(fields).await,
            Submission::Update(id, fields) => client.update_reservation(id, fields).await,
        };
        self.finish(result)
    }

    fn finish(&mut self, result: Result<Reservation, ReservationError>) -> Result<Reservation, ReservationError> {
        match result {
            Ok(reservation) => {
                self.complete(&reservation);
                Ok(reservation)
            }
            Err(e) => {
                warn!(error = %e, "Submission rejected, draft kept");
                Err(e)
            }
        }
    }
}
