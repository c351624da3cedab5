use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{StoreError, Submission, SubmissionStore};

/// In-process store, mainly for tests that don't need a file on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Vec<Submission>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submissions(submissions: Vec<Submission>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(submissions)),
        }
    }

    pub async fn snapshot(&self) -> Vec<Submission> {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        let mut current = self.inner.write().await;
        *current = submissions.to_vec();
        Ok(())
    }
}
