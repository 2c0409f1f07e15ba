//! Project store trait definitions

use crate::graph::GraphSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Project name must not be empty")]
    EmptyName,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A named graph saved by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Serialized back in the same `{nodes, edges}` shape the builder reads
    pub graph: GraphSpec,
    pub saved_at: DateTime<Utc>,
}

/// Trait for project persistence backends
///
/// Implementations must be thread-safe (Send + Sync) so one store can be
/// shared by concurrent requests.
pub trait ProjectStore: Send + Sync {
    /// Save a graph under a name. Saving an existing name adds another
    /// project rather than replacing it.
    fn save(&self, user_id: &str, name: &str, graph: &GraphSpec) -> StorageResult<Project>;

    /// All projects of a user, oldest first
    fn list(&self, user_id: &str) -> StorageResult<Vec<Project>>;

    /// Most recently saved project with the given name
    fn latest(&self, user_id: &str, name: &str) -> StorageResult<Project> {
        self.list(user_id)?
            .into_iter()
            .rev()
            .find(|p| p.name == name)
            .ok_or_else(|| StorageError::ProjectNotFound(name.to_string()))
    }
}
