//! # Bus Seat Reservation
//!
//! Seat reservations for a school bus night run: a fixed grid of eight seats,
//! ten departure slots, and an in-memory store that never lets two
//! reservations hold the same seat.
//!
//! ## Layers
//!
//! - **Domain types** - [`Reservation`](domain::Reservation), [`Seat`](domain::Seat),
//!   [`DepartureTime`](domain::DepartureTime)
//! - **Store** - [`ReservationStore`](reservation_actor::ReservationStore): create,
//!   update in place, idempotent delete, seat lookups
//! - **Booking form** - [`BookingForm`](booking::BookingForm) holding a draft and the
//!   edit target, plus the pure seat toggle and time selection
//! - **Service** - a [`ResourceActor`](actor_framework::ResourceActor) owning the store,
//!   reached through [`ReservationClient`](clients::ReservationClient)
//! - **System** - [`ReservationSystem`](app_system::ReservationSystem) for startup and
//!   shutdown, [`setup_tracing`](app_system::setup_tracing) for logs
//!
//! ## Example Usage
//!
//! ```rust
//! use bus_seat_reservation::booking::BookingForm;
//! use bus_seat_reservation::domain::{DepartureTime, Seat};
//! use bus_seat_reservation::reservation_actor::ReservationStore;
//!
//! let mut store = ReservationStore::new();
//! let mut form = BookingForm::new();
//! form.set_name("Ana");
//! form.set_destination("Lakeview");
//! form.select_time(DepartureTime::H22);
//! form.click_seat(Seat::new(3)?, &store);
//!
//! let ana = form.submit(&mut store)?;
//! assert!(store.is_seat_taken(Seat::new(3)?));
//! assert_eq!(store.list(), &[ana]);
//! # Ok::<(), bus_seat_reservation::reservation_actor::ReservationError>(())
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod booking;
pub mod clients;
pub mod domain;
pub mod reservation_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
