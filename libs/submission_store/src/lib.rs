pub mod models;
mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use models::{StopwatchTime, Submission};

use async_trait::async_trait;
use std::sync::Arc;

pub type SharedStore = Arc<dyn SubmissionStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("Store write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("Malformed store contents: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Backing storage for the whole submission collection.
///
/// Every call works on the full collection; there is no partial read or
/// write and no locking between a `load` and the following `save`.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Submission>, StoreError>;

    async fn save(&self, submissions: &[Submission]) -> Result<(), StoreError>;
}
