use crate::errors::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTokenStorage = Arc<dyn TokenStorageTrait + Send + Sync>;

/// Persistent string key-value storage for client state that must survive a
/// restart (tokens, selected school).
#[async_trait]
pub trait TokenStorageTrait: std::fmt::Debug {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
