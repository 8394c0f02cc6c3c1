use std::{fmt::Debug, io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("token slot {path} is not accessible")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable home of the session token.
///
/// An empty slot and a missing slot are the same thing: no session.
#[async_trait]
pub trait TokenStore: Debug + Send + Sync {
    async fn get(&self) -> Result<Option<Secret<String>>, StoreError>;

    async fn set(&self, token: &Secret<String>) -> Result<(), StoreError>;

    async fn clear(&self) -> Result<(), StoreError>;
}

/// Keeps the token in a single file, one file per slot name.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<Secret<String>>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(token) => {
                let token = token.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Secret::new(token.to_owned())))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn set(&self, token: &Secret<String>) -> Result<(), StoreError> {
        tracing::debug!(path = %self.path.display(), "persisting session token");
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, token.expose_secret())
            .await
            .map_err(|e| self.io_error(e))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        tracing::debug!(path = %self.path.display(), "forgetting session token");
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Volatile store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<Secret<String>>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(Secret::new(token.to_owned())))),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<Secret<String>>, StoreError> {
        Ok(self
            .slot
            .lock()
            .await
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
            .cloned())
    }

    async fn set(&self, token: &Secret<String>) -> Result<(), StoreError> {
        *self.slot.lock().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
