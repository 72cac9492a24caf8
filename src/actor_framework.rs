use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks)
// =============================================================================

/// Errors raised by the framework itself, independent of any entity's rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError<Id: Display> {
    #[error("Item not found: {0}")]
    NotFound(Id),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Id generator produced no unused id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

/// Trait that any domain entity must implement to be managed by a `ResourceStore`.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug;
    type CreateParams: Send + Debug;
    type Patch: Send + Debug;
    type Error: std::error::Error + Clone + Send + Sync + From<FrameworkError<Self::Id>> + 'static;

    /// Get the ID of the entity
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    /// Called against every *other* stored entity before `self` is inserted or
    /// replaced. Cross-entity uniqueness rules live here.
    fn check_unique(&self, _other: &Self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE SYNCHRONOUS STORE
// =============================================================================

/// Ordered in-memory collection of entities. Insertion order is preserved and
/// updates replace items in place.
pub struct ResourceStore<T: Entity> {
    items: Vec<T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl FnMut() -> T::Id + Send + 'static) -> Self {
        Self {
            items: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Gives up after `len + 1` draws; a generator that keeps repeating
    /// stored ids would otherwise spin forever.
    fn fresh_id(&mut self) -> Result<T::Id, FrameworkError<T::Id>> {
        let attempts = self.items.len() + 1;
        for _ in 0..attempts {
            let id = (self.next_id_fn)();
            if self.position(id).is_none() {
                return Ok(id);
            }
            warn!(%id, "Generated id already in use, skipping");
        }
        Err(FrameworkError::IdExhausted { attempts })
    }

    fn check_against_others(&self, candidate: &T, skip: Option<usize>) -> Result<(), T::Error> {
        self.items
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != skip)
            .try_for_each(|(_, other)| candidate.check_unique(other))
    }

    pub fn create(&mut self, params: T::CreateParams) -> Result<T, T::Error> {
        let id = self.fresh_id()?;
        let item = T::from_create_params(id, params)?;
        self.check_against_others(&item, None)?;
        self.items.push(item.clone());
        Ok(item)
    }

    /// Applies `patch` to a copy first so a rejected update leaves the stored
    /// item untouched.
    pub fn update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        let index = self.position(id).ok_or(FrameworkError::NotFound(id))?;
        let mut candidate = self.items[index].clone();
        candidate.on_update(patch)?;
        self.check_against_others(&candidate, Some(index))?;
        self.items[index] = candidate.clone();
        Ok(candidate)
    }

    pub fn delete(&mut self, id: T::Id) -> Option<T> {
        self.position(id).map(|index| self.items.remove(index))
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// 3. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
}

// =============================================================================
// 4. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns a `ResourceStore` and serves requests one at a time until every
/// client has been dropped.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, store: ResourceStore<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!("Processing create request");
                    let result = self.store.create(params);
                    match &result {
                        Ok(item) => info!(id = %item.id(), "Item created"),
                        Err(e) => warn!(error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(%id, "Processing get request");
                    let _ = respond_to.send(Ok(self.store.get(id).cloned()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    debug!(%id, "Processing update request");
                    let result = self.store.update(id, patch);
                    match &result {
                        Ok(_) => info!(%id, "Item updated"),
                        Err(e) => warn!(%id, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(%id, "Processing delete request");
                    let removed = self.store.delete(id);
                    if removed.is_some() {
                        info!(%id, "Item deleted");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(count = self.store.len(), "Processing list request");
                    let _ = respond_to.send(Ok(self.store.list().to_vec()));
                }
            }
        }
        info!("Actor stopped");
    }
}

// =============================================================================
// 5. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::<T::Id>::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::<T::Id>::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }
}

// =============================================================================
// 6. TESTS
// =============================================================================
