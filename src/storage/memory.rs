//! In-memory project store

use super::traits::{Project, ProjectStore, StorageError, StorageResult};
use crate::graph::GraphSpec;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// A stored row: graph kept as JSON text, like a database column would
#[derive(Debug, Clone)]
struct StoredProject {
    id: String,
    name: String,
    graph_json: String,
    saved_at: DateTime<Utc>,
}

/// Project store backed by a concurrent map of user → projects
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: DashMap<String, Vec<StoredProject>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: DashMap::new(),
        }
    }

    /// Number of projects across all users
    pub fn project_count(&self) -> usize {
        self.projects.iter().map(|r| r.value().len()).sum()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn save(&self, user_id: &str, name: &str, graph: &GraphSpec) -> StorageResult<Project> {
        if name.trim().is_empty() {
            return Err(StorageError::EmptyName);
        }
        let row = StoredProject {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            graph_json: serde_json::to_string(graph)?,
            saved_at: Utc::now(),
        };
        let project = Project {
            id: row.id.clone(),
            name: row.name.clone(),
            graph: graph.clone(),
            saved_at: row.saved_at,
        };
        self.projects.entry(user_id.to_string()).or_default().push(row);
        Ok(project)
    }

    fn list(&self, user_id: &str) -> StorageResult<Vec<Project>> {
        let rows = match self.projects.get(user_id) {
            Some(rows) => rows.value().clone(),
            None => return Ok(Vec::new()),
        };
        rows.into_iter()
            .map(|row| {
                Ok(Project {
                    graph: serde_json::from_str(&row.graph_json)?,
                    id: row.id,
                    name: row.name,
                    saved_at: row.saved_at,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphSpec {
        GraphSpec::default()
            .with_node(1, "A")
            .with_node(2, "B")
            .with_edge(1, 2)
    }

    #[test]
    fn test_save_and_list() {
        let store = MemoryProjectStore::new();
        let saved = store.save("alice", "pipeline", &sample()).unwrap();

        let projects = store.list("alice").unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0], saved);
        assert_eq!(projects[0].graph, sample());
    }

    #[test]
    fn test_users_are_isolated() {
        let store = MemoryProjectStore::new();
        store.save("alice", "a", &sample()).unwrap();
        store.save("bob", "b", &GraphSpec::default()).unwrap();

        assert_eq!(store.list("alice").unwrap().len(), 1);
        assert_eq!(store.list("bob").unwrap()[0].name, "b");
        assert!(store.list("carol").unwrap().is_empty());
        assert_eq!(store.project_count(), 2);
    }

    #[test]
    fn test_same_name_appends_and_latest_wins() {
        let store = MemoryProjectStore::new();
        store.save("alice", "draft", &GraphSpec::default()).unwrap();
        let second = store.save("alice", "draft", &sample()).unwrap();

        assert_eq!(store.list("alice").unwrap().len(), 2);
        let latest = store.latest("alice", "draft").unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(latest.graph, sample());
    }

    #[test]
    fn test_latest_missing_name() {
        let store = MemoryProjectStore::new();
        let err = store.latest("alice", "ghost").unwrap_err();
        assert!(matches!(err, StorageError::ProjectNotFound(name) if name == "ghost"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let store = MemoryProjectStore::new();
        assert!(matches!(
            store.save("alice", "  ", &sample()),
            Err(StorageError::EmptyName)
        ));
    }
}
