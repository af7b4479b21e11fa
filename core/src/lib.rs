//! bfs-path-core: breadth-first traversal over character-labeled graphs.
//!
//! Builds an undirected adjacency structure from an edge list, computes
//! BFS distances and predecessor links from a source vertex, and
//! reconstructs shortest (fewest-hop) paths by walking predecessors.
//!
//! Topology ([`Graph`]) is immutable after construction. Traversal state
//! ([`Traversal`]) is a separate value per run, so one graph can serve
//! repeated or concurrent queries without stale visited flags.

mod config;
mod error;
mod graph;
mod traversal;

pub use config::{PathConfig, UnreachablePolicy};
pub use error::{GraphError, Result};
pub use graph::{Graph, Label};
pub use traversal::{Traversal, Vertex};
