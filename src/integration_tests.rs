#[cfg(test)]
mod tests {
    use crate::app_system::{ReservationSystem, SystemConfig};
    use crate::booking::{BookingForm, EditState};
    use crate::domain::{DepartureTime, ReservationFields, Seat};
    use crate::reservation_actor::{ReservationError, ReservationStore};

    fn seat(label: &str) -> Seat {
        label.parse().unwrap()
    }

    fn time(label: &str) -> DepartureTime {
        label.parse().unwrap()
    }

    #[tokio::test]
    async fn test_reference_scenarios_through_service() {
        let system = ReservationSystem::with_config(&SystemConfig::default().with_buffer_size(4));
        let client = system.reservation_client.clone();

        // 1. Create
        let ana = client
            .create_reservation(ReservationFields::new("Ana", "Lakeview", Some(time("22:00")), Some(seat("3"))))
            .await
            .unwrap();
        assert_eq!(client.list_reservations().await.unwrap(), vec![ana.clone()]);
        assert!(client.is_seat_taken(seat("3")).await.unwrap());

        // 2. Conflict
        let err = client
            .create_reservation(ReservationFields::new("Ben", "Hillcrest", Some(time("23:00")), Some(seat("3"))))
            .await
            .unwrap_err();
        assert_eq!(err, ReservationError::SeatConflict { seat: seat("3"), held_by: ana.id });
        assert_eq!(client.list_reservations().await.unwrap().len(), 1);

        // 3. Edit
        let mut form = BookingForm::new();
        let current = client.get_reservation(ana.id).await.unwrap().unwrap();
        form.begin_edit(&current);
        form.set_destination("Northgate");
        let updated = form.submit_to(&client).await.unwrap();
        assert_eq!(updated.id, ana.id);
        assert_eq!(updated.destination, "Northgate");
        assert_eq!(updated.seat, Some(seat("3")));
        assert_eq!(form.edit_state(), EditState::Idle);
        assert_eq!(client.list_reservations().await.unwrap(), vec![updated]);

        // 4. Delete
        assert!(client.delete_reservation(ana.id).await.unwrap().is_some());
        assert!(client.delete_reservation(ana.id).await.unwrap().is_none());
        assert!(client.list_reservations().await.unwrap().is_empty());
        assert!(!client.is_seat_taken(seat("3")).await.unwrap());

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_form_create_against_service() {
        let system = ReservationSystem::new();
        let client = system.reservation_client.clone();

        let mut form = BookingForm::new();
        form.set_name("Cara");
        form.set_destination("Riverside");
        form.select_time(DepartureTime::H01);
        let snapshot = client.list_reservations().await.unwrap();
        form.click_seat(seat("8"), snapshot.as_slice());

        let cara = form.submit_to(&client).await.unwrap();
        assert_eq!(cara.seat, Some(seat("8")));
        assert_eq!(cara.time, Some(DepartureTime::H01));

        // The seat is now greyed out for the next booking
        let snapshot = client.list_reservations().await.unwrap();
        form.click_seat(seat("8"), snapshot.as_slice());
        assert_eq!(form.draft().seat, None);

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_service_serves_seeded_store() {
        let mut store = ReservationStore::new();
        let ana = store.create("Ana", "Lakeview", Some(time("22:00")), Some(seat("3"))).unwrap();

        let system = ReservationSystem::with_store(&SystemConfig::default(), store);
        let client = system.reservation_client.clone();

        assert_eq!(client.list_reservations().await.unwrap(), vec![ana.clone()]);
        assert!(client.is_seat_taken(seat("3")).await.unwrap());

        // The store's counter carries on past the seeded id
        let ben = client
            .create_reservation(ReservationFields::new("Ben", "Hillcrest", None, Some(seat("4"))))
            .await
            .unwrap();
        assert_ne!(ben.id, ana.id);

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_default_system_starts_empty() {
        let system = ReservationSystem::default();
        assert!(system.reservation_client.list_reservations().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_unknown_id_through_service() {
        let system = ReservationSystem::new();
        let client = system.reservation_client.clone();

        let err = client
            .update_reservation(crate::domain::ReservationId(99), ReservationFields::new("A", "B", None, None))
            .await
            .unwrap_err();
        assert_eq!(err, ReservationError::NotFound(crate::domain::ReservationId(99)));

        drop(client);
        system.shutdown().await.unwrap();
    }
}
