//! Project storage for graphlens
//!
//! Saved graphs are a collaborator of the analysis core: they are produced
//! and consumed in the same `{nodes, edges}` shape the builder reads.
//! `MemoryProjectStore` is the bundled implementation of `ProjectStore`.

mod memory;
mod traits;

pub use memory::MemoryProjectStore;
pub use traits::{Project, ProjectStore, StorageError, StorageResult};
