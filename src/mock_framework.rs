//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_update`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// Requests land on `receiver` instead of a running `ResourceActor`, so a test
/// can inspect each one and answer with whatever success or failure it wants.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>, T::Error>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingForm;
    use crate::clients::ReservationClient;
    use crate::domain::{Reservation, ReservationFields, ReservationId, Seat};
    use crate::reservation_actor::ReservationError;

    fn ana(id: u64) -> Reservation {
        Reservation {
            id: ReservationId(id),
            name: "Ana".to_string(),
            destination: "Lakeview".to_string(),
            time: None,
            seat: Some(Seat::new(3).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_create_forwards_fields() {
        let (inner, mut receiver) = create_mock_client::<Reservation>(10);
        let client = ReservationClient::new(inner);

        let create_task = tokio::spawn(async move {
            let fields = ReservationFields::new("Ana", "Lakeview", None, Some(Seat::new(3).unwrap()));
            client.create_reservation(fields).await
        });

        let (fields, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(fields.name, "Ana");
        responder.send(Ok(ana(1))).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(ana(1)));
    }

    #[tokio::test]
    async fn test_is_seat_taken_reads_list() {
        let (inner, mut receiver) = create_mock_client::<Reservation>(10);
        let client = ReservationClient::new(inner);

        let task = tokio::spawn(async move {
            let three = client.is_seat_taken(Seat::new(3).unwrap()).await;
            let four = client.is_seat_taken(Seat::new(4).unwrap()).await;
            (three, four)
        });

        for _ in 0..2 {
            let responder = expect_list(&mut receiver).await.expect("Expected List request");
            responder.send(Ok(vec![ana(1)])).unwrap();
        }

        assert_eq!(task.await.unwrap(), (Ok(true), Ok(false)));
    }

    #[tokio::test]
    async fn test_form_keeps_edit_target_when_service_rejects() {
        let (inner, mut receiver) = create_mock_client::<Reservation>(10);
        let client = ReservationClient::new(inner);

        let task = tokio::spawn(async move {
            let mut form = BookingForm::new();
            form.begin_edit(&ana(7));
            let result = form.submit_to(&client).await;
            (form, result)
        });

        let (id, _patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, ReservationId(7));
        responder.send(Err(ReservationError::NotFound(id))).unwrap();

        let (form, result) = task.await.unwrap();
        assert_eq!(result, Err(ReservationError::NotFound(ReservationId(7))));
        assert_eq!(form.draft().name, "Ana");
    }

    #[tokio::test]
    async fn test_closed_service_is_communication_error() {
        let (inner, receiver) = create_mock_client::<Reservation>(10);
        let client = ReservationClient::new(inner);
        drop(receiver);

        let err = client.list_reservations().await.unwrap_err();
        assert!(matches!(err, ReservationError::ActorCommunicationError(_)));
    }
}
