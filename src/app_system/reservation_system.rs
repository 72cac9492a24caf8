use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::ReservationClient;
use crate::domain::Reservation;
use crate::reservation_actor::ReservationStore;
use super::SystemConfig;

/// Starts the reservation service and hands out its client.
pub struct ReservationSystem {
    pub reservation_client: ReservationClient,
    handle: JoinHandle<()>,
}

impl Default for ReservationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationSystem {
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    pub fn with_config(config: &SystemConfig) -> Self {
        Self::with_store(config, ReservationStore::new())
    }

    /// Serves an existing store, e.g. one seeded by the caller.
    pub fn with_store(config: &SystemConfig, store: ReservationStore) -> Self {
        info!(buffer_size = config.buffer_size, "Starting reservation system");
        let (actor, resource_client) =
            ResourceActor::<Reservation>::new(config.buffer_size, store.into_inner());
        let handle = tokio::spawn(actor.run());

        Self {
            reservation_client: ReservationClient::new(resource_client),
            handle,
        }
    }

    /// Drops the system's client and waits for the service to drain. Clones
    /// handed out earlier keep the service alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.reservation_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
