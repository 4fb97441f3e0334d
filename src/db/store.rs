// db/store.rs
use async_trait::async_trait;
use thiserror::Error;

/// The seven logical collections the system persists. Each maps to a
/// stable storage key (local file stem) and a remote table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Rides,
    Items,
    Tasks,
    Bills,
    Chats,
    Messages,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Users => "campus_connect_users",
            Collection::Rides => "campus_connect_rides",
            Collection::Items => "campus_connect_items",
            Collection::Tasks => "campus_connect_tasks",
            Collection::Bills => "campus_connect_bills",
            Collection::Chats => "campus_connect_chats",
            Collection::Messages => "campus_connect_messages",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Rides => "rides",
            Collection::Items => "items",
            Collection::Tasks => "tasks",
            Collection::Bills => "bills",
            Collection::Chats => "chats",
            Collection::Messages => "messages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

impl BackendKind {
    pub fn to_str(&self) -> &str {
        match self {
            BackendKind::Remote => "remote",
            BackendKind::Local => "local",
        }
    }
}

/// Errors that can occur against either storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote store error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Remote store does not implement {0}")]
    Unimplemented(&'static str),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Uniform snapshot persistence over one collection. Snapshots are raw
/// JSON arrays; typed access lives on `DBClient`. Implementations are
/// selected once at process start and never re-evaluated per call.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Raw JSON snapshot of the collection. `None` means the collection
    /// was never initialised (lets the caller seed lazily).
    async fn load(&self, collection: Collection) -> Result<Option<String>, StoreError>;

    /// Replace the entire collection snapshot. No partial writes.
    async fn save(&self, collection: Collection, snapshot: String) -> Result<(), StoreError>;

    /// Insert-or-replace a single record matched by its `id` field.
    async fn upsert(
        &self,
        collection: Collection,
        record: serde_json::Value,
    ) -> Result<(), StoreError>;
}
