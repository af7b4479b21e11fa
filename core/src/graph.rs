use std::collections::HashMap;

use tracing::debug;

use crate::config::PathConfig;
use crate::error::{GraphError, Result};

/// Vertex identity: a single character.
pub type Label = char;

/// Dense arena slot of a vertex, assigned in first-mention order.
pub(crate) type VertexIdx = usize;

/// Undirected graph topology: vertex arena + adjacency lists.
///
/// Edge (a, b) appends b to a's list and a to b's list, in edge order.
/// Self-loops and duplicate edges are stored as given. The topology is
/// fixed after construction; traversal state lives in
/// [`Traversal`](crate::Traversal), never in the graph, so a shared
/// `&Graph` can serve any number of independent traversals.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<Label>,
    index: HashMap<Label, VertexIdx>,
    adjacency: Vec<Vec<VertexIdx>>,
    edge_count: usize,
    config: PathConfig,
}

impl Graph {
    /// Build a graph from an ordered edge list.
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Label, Label)>,
    {
        let edges = edges.into_iter();
        let (hint, _) = edges.size_hint();
        let mut graph = Self {
            labels: Vec::with_capacity(hint),
            index: HashMap::with_capacity(hint),
            adjacency: Vec::with_capacity(hint),
            edge_count: 0,
            config: PathConfig::default(),
        };

        for (from, to) in edges {
            let a = graph.ensure_vertex(from);
            let b = graph.ensure_vertex(to);
            graph.adjacency[a].push(b);
            graph.adjacency[b].push(a);
            graph.edge_count += 1;
        }

        debug!(
            vertices = graph.labels.len(),
            edges = graph.edge_count,
            "graph constructed"
        );
        graph
    }

    /// Replace the options used by [`Graph::shortest_path`].
    #[must_use]
    pub fn with_config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Register `label` if unseen, returning its arena slot either way.
    fn ensure_vertex(&mut self, label: Label) -> VertexIdx {
        if let Some(&idx) = self.index.get(&label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        self.index.insert(label, idx);
        idx
    }

    pub(crate) fn index_of(&self, label: Label) -> Result<VertexIdx> {
        self.index
            .get(&label)
            .copied()
            .ok_or(GraphError::UnknownVertex(label))
    }

    pub(crate) fn label_at(&self, idx: VertexIdx) -> Label {
        self.labels[idx]
    }

    pub(crate) fn adjacent(&self, idx: VertexIdx) -> &[VertexIdx] {
        &self.adjacency[idx]
    }

    /// True if `label` appeared as an endpoint of some edge.
    pub fn contains(&self, label: Label) -> bool {
        self.index.contains_key(&label)
    }

    /// Neighbors of `label` in adjacency (edge insertion) order.
    pub fn neighbors(&self, label: Label) -> Result<impl Iterator<Item = Label> + '_> {
        let idx = self.index_of(label)?;
        Ok(self.adjacency[idx].iter().map(|&n| self.labels[n]))
    }

    /// Number of adjacency entries of `label`. A self-loop counts twice.
    pub fn degree(&self, label: Label) -> Result<usize> {
        Ok(self.adjacency[self.index_of(label)?].len())
    }

    /// All labels, in first-mention order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Edges as supplied, duplicates and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let arena = self.labels.len() * (size_of::<Label>() + size_of::<Vec<VertexIdx>>());
        let index = self.index.len() * (size_of::<Label>() + size_of::<VertexIdx>() + 8);
        let adj: usize = self
            .adjacency
            .iter()
            .map(|v| v.len() * size_of::<VertexIdx>())
            .sum();

        arena + index + adj
    }
}

impl FromIterator<(Label, Label)> for Graph {
    fn from_iter<I: IntoIterator<Item = (Label, Label)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnreachablePolicy;

    #[test]
    fn test_symmetric_adjacency() {
        let g = Graph::new([('a', 'b'), ('a', 'c')]);
        assert_eq!(g.neighbors('a').unwrap().collect::<Vec<_>>(), vec!['b', 'c']);
        assert_eq!(g.neighbors('b').unwrap().collect::<Vec<_>>(), vec!['a']);
        assert_eq!(g.neighbors('c').unwrap().collect::<Vec<_>>(), vec!['a']);
    }

    #[test]
    fn test_first_mention_order() {
        let g = Graph::new([('c', 'a'), ('b', 'a'), ('d', 'c')]);
        assert_eq!(g.labels(), &['c', 'a', 'b', 'd']);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_neighbor_order_follows_edges() {
        let g = Graph::new([('x', 'z'), ('y', 'x'), ('x', 'w')]);
        assert_eq!(
            g.neighbors('x').unwrap().collect::<Vec<_>>(),
            vec!['z', 'y', 'w']
        );
    }

    #[test]
    fn test_self_loop_stored() {
        let g = Graph::new([('a', 'a')]);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors('a').unwrap().collect::<Vec<_>>(), vec!['a', 'a']);
        assert_eq!(g.degree('a').unwrap(), 2);
    }

    #[test]
    fn test_duplicate_edges_stored() {
        let g = Graph::new([('a', 'b'), ('b', 'a'), ('a', 'b')]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree('a').unwrap(), 3);
        assert_eq!(g.degree('b').unwrap(), 3);
    }

    #[test]
    fn test_unknown_label() {
        let g = Graph::new([('a', 'b')]);
        assert!(!g.contains('q'));
        assert_eq!(g.degree('q'), Err(GraphError::UnknownVertex('q')));
        assert!(matches!(g.neighbors('q'), Err(GraphError::UnknownVertex('q'))));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(Vec::<(Label, Label)>::new());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.labels().is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let g: Graph = "abcd".chars().zip("bcda".chars()).collect();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.degree('a').unwrap(), 2);
    }

    #[test]
    fn test_with_config() {
        let config = PathConfig::new().with_unreachable(UnreachablePolicy::Truncated);
        let g = Graph::new([('a', 'b')]).with_config(config);
        assert_eq!(g.config().unreachable, UnreachablePolicy::Truncated);
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let g = Graph::new([('a', 'b'), ('b', 'c')]);
        assert!(g.memory_usage() > 0);
    }
}
