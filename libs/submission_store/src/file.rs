use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::{StoreError, Submission, SubmissionStore};

/// Store that keeps the collection as one pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Wraps `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Wraps `path`, creating parent directories and seeding an empty array
    /// when the file does not exist yet. Existing contents are left as is.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::new(path);

        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(StoreError::Write)?;
        }

        if !fs::try_exists(&store.path).await.map_err(StoreError::Read)? {
            debug!(path = %store.path.display(), "Seeding empty submission store");
            store.save(&[]).await?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Submission>, StoreError> {
        let bytes = fs::read(&self.path).await.map_err(StoreError::Read)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.path.display(), "Store file is empty");
            return Ok(Vec::new());
        }

        let submissions: Vec<Submission> =
            serde_json::from_slice(&bytes).map_err(StoreError::Decode)?;
        debug!(path = %self.path.display(), count = submissions.len(), "Loaded submissions");
        Ok(submissions)
    }

    async fn save(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(submissions).map_err(StoreError::Encode)?;
        fs::write(&self.path, data).await.map_err(StoreError::Write)?;
        debug!(path = %self.path.display(), count = submissions.len(), "Saved submissions");
        Ok(())
    }
}
