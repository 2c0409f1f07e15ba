//! Graph input types and the immutable snapshot analyzers run over

mod builder;
pub mod io;
mod spec;


pub use builder::{build, Graph, NodeData, ValidationError};
pub use spec::{EdgeSpec, GraphSpec, NodeKey, NodeSpec};
