use tracing::{error, info, warn, Instrument};

use bus_seat_reservation::app_system::{setup_tracing, ReservationSystem, SystemConfig};
use bus_seat_reservation::booking::BookingForm;
use bus_seat_reservation::clients::ReservationClient;
use bus_seat_reservation::domain::{DepartureTime, ReservationFields, ReservationId, Seat};
use bus_seat_reservation::reservation_actor::ReservationError;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Reservation(#[from] ReservationError),
    #[error("Seat {seat} was booked twice, second holder is reservation {reservation_id}")]
    DoubleBooking { seat: Seat, reservation_id: ReservationId },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::default();
    setup_tracing(&config);

    info!("Starting seat reservation demo");

    let system = ReservationSystem::with_config(&config);
    let client = system.reservation_client.clone();

    if let Err(e) = run_scenarios(&client).await {
        error!(error = %e, "Demo failed");
        return Err(e.to_string());
    }

    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}

async fn run_scenarios(client: &ReservationClient) -> Result<(), DemoError> {
    let seat_three: Seat = "3".parse()?;

    // 1. Ana books seat 3 through the form
    let ana = async {
        let mut form = BookingForm::new();
        form.set_name("Ana");
        form.set_destination("Lakeview");
        form.select_time("22:00".parse()?);
        let snapshot = client.list_reservations().await?;
        form.click_seat(seat_three, snapshot.as_slice());
        form.submit_to(client).await
    }
    .instrument(tracing::info_span!("create"))
    .await?;
    info!(reservation_id = %ana.id, seat = %seat_three, "Ana booked");

    // 2. Ben tries the same seat directly and is refused
    let conflict = client
        .create_reservation(ReservationFields::new("Ben", "Hillcrest", Some(DepartureTime::H23), Some(seat_three)))
        .instrument(tracing::info_span!("conflict"))
        .await;
    match conflict {
        Err(ReservationError::SeatConflict { seat, held_by }) => {
            warn!(%seat, %held_by, "Ben was refused, seat already taken")
        }
        Err(e) => return Err(e.into()),
        Ok(r) => {
            return Err(DemoError::DoubleBooking {
                seat: seat_three,
                reservation_id: r.id,
            })
        }
    }

    // 3. Ana changes her destination
    let updated = async {
        let current = client
            .get_reservation(ana.id)
            .await?
            .ok_or(ReservationError::NotFound(ana.id))?;
        let mut form = BookingForm::new();
        form.begin_edit(&current);
        form.set_destination("Northgate");
        form.submit_to(client).await
    }
    .instrument(tracing::info_span!("edit"))
    .await?;
    info!(reservation_id = %updated.id, destination = %updated.destination, "Ana updated");

    // 4. Ana cancels
    client.delete_reservation(ana.id).await?;
    let remaining = client.list_reservations().await?;
    let seat_three_taken = client.is_seat_taken(seat_three).await?;
    info!(remaining = remaining.len(), seat_three_taken, "Ana deleted");

    Ok(())
}
