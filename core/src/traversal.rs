use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::{PathConfig, UnreachablePolicy};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Label, VertexIdx};

/// Snapshot of one vertex's traversal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vertex {
    pub label: Label,
    pub visited: bool,
    /// Hop count from the traversal source, or [`Vertex::INFINITY`].
    pub dist: u32,
    /// Vertex that first discovered this one.
    pub predecessor: Option<Label>,
}

impl Vertex {
    /// Distance of a vertex no traversal has reached.
    pub const INFINITY: u32 = u32::MAX;

    /// A vertex no traversal has touched.
    pub fn unvisited(label: Label) -> Self {
        Self {
            label,
            visited: false,
            dist: Self::INFINITY,
            predecessor: None,
        }
    }

    /// A traversal source: visited, at distance 0, with no predecessor.
    pub fn source(label: Label) -> Self {
        Self {
            label,
            visited: true,
            dist: 0,
            predecessor: None,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.dist != Self::INFINITY
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex{{label={}, visited={}, dist=", self.label, self.visited)?;
        if self.is_reached() {
            write!(f, "{}", self.dist)?;
        } else {
            write!(f, "inf")?;
        }
        match self.predecessor {
            Some(pi) => write!(f, ", pi={}}}", pi),
            None => write!(f, ", pi=-}}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct VertexState {
    visited: bool,
    dist: u32,
    predecessor: Option<VertexIdx>,
}

impl VertexState {
    const UNVISITED: Self = Self {
        visited: false,
        dist: Vertex::INFINITY,
        predecessor: None,
    };
}

/// BFS state over one [`Graph`]: visited flag, distance and predecessor
/// per vertex.
///
/// [`Traversal::run`] continues from whatever state is already present.
/// Vertices marked visited by an earlier run are never revisited, so a
/// second run from a different source leaves stale distances and
/// predecessors behind. Call [`Traversal::reset`] between runs, or use
/// [`Graph::bfs`], which always starts from a fresh state.
///
/// Each traversal owns its state, so threads sharing a `&Graph` each use
/// their own `Traversal`.
#[derive(Debug, Clone)]
pub struct Traversal<'g> {
    graph: &'g Graph,
    state: Vec<VertexState>,
    source: Option<VertexIdx>,
}

impl<'g> Traversal<'g> {
    /// Fresh state: every vertex unvisited, at infinite distance.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            state: vec![VertexState::UNVISITED; graph.node_count()],
            source: None,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forget every earlier run.
    pub fn reset(&mut self) {
        self.state.fill(VertexState::UNVISITED);
        self.source = None;
    }

    /// Breadth-first search from `source` on the current state.
    ///
    /// When `target` is given, discovering it ends the scan of the vertex
    /// being expanded and the target is not enqueued; vertices already
    /// queued are still expanded. Returns the number of vertices newly
    /// marked visited.
    pub fn run(&mut self, source: Label, target: Option<Label>) -> Result<usize> {
        let src = self.graph.index_of(source)?;
        let target = target.map(|t| self.graph.index_of(t)).transpose()?;
        Ok(self.run_from(src, target))
    }

    pub(crate) fn run_from(&mut self, src: VertexIdx, target: Option<VertexIdx>) -> usize {
        let graph = self.graph;
        let mut settled = usize::from(!self.state[src].visited);
        self.source = Some(src);
        self.state[src].visited = true;
        self.state[src].dist = 0;

        let mut queue: VecDeque<VertexIdx> = VecDeque::new();
        queue.push_back(src);

        while let Some(u) = queue.pop_front() {
            let next_dist = self.state[u].dist.saturating_add(1);
            for &v in graph.adjacent(u) {
                let state = &mut self.state[v];
                if state.visited {
                    continue;
                }
                state.visited = true;
                state.dist = next_dist;
                state.predecessor = Some(u);
                settled += 1;

                if target == Some(v) {
                    trace!(
                        vertex = %graph.label_at(v),
                        dist = next_dist,
                        "target discovered, ending neighbor scan"
                    );
                    break;
                }
                queue.push_back(v);
            }
        }

        debug!(
            source = %graph.label_at(src),
            goal = ?target.map(|t| graph.label_at(t)),
            settled,
            "bfs complete"
        );
        settled
    }

    /// Source of the most recent run.
    pub fn source(&self) -> Option<Label> {
        self.source.map(|s| self.graph.label_at(s))
    }

    fn snapshot(&self, idx: VertexIdx) -> Vertex {
        let s = &self.state[idx];
        Vertex {
            label: self.graph.label_at(idx),
            visited: s.visited,
            dist: s.dist,
            predecessor: s.predecessor.map(|p| self.graph.label_at(p)),
        }
    }

    /// Every registered vertex, reached or not, in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.state.len()).map(move |idx| self.snapshot(idx))
    }

    pub fn vertex(&self, label: Label) -> Result<Vertex> {
        Ok(self.snapshot(self.graph.index_of(label)?))
    }

    /// Hop count to `label`, `None` while unreached.
    pub fn distance(&self, label: Label) -> Result<Option<u32>> {
        let v = self.vertex(label)?;
        Ok(v.is_reached().then_some(v.dist))
    }

    pub fn predecessor(&self, label: Label) -> Result<Option<Label>> {
        Ok(self.vertex(label)?.predecessor)
    }

    pub fn is_visited(&self, label: Label) -> Result<bool> {
        Ok(self.vertex(label)?.visited)
    }

    pub fn visited_count(&self) -> usize {
        self.state.iter().filter(|s| s.visited).count()
    }

    /// Walk predecessors back from `target` on the current state.
    ///
    /// The walk stops at the most recent source or at a vertex without a
    /// predecessor, so an unreached target yields a sequence that does not
    /// start at the source.
    pub fn path_to(&self, target: Label) -> Result<Vec<Vertex>> {
        let target = self.graph.index_of(target)?;
        Ok(self.walk_back(target))
    }

    fn walk_back(&self, target: VertexIdx) -> Vec<Vertex> {
        let mut path = Vec::new();
        let mut current = target;

        loop {
            path.push(self.snapshot(current));
            if Some(current) == self.source {
                break;
            }
            match self.state[current].predecessor {
                Some(parent) => current = parent,
                None => break,
            }
        }

        path.reverse();
        path
    }
}

impl Graph {
    /// Full breadth-first traversal from `source` on fresh state.
    pub fn bfs(&self, source: Label) -> Result<Traversal<'_>> {
        let src = self.index_of(source)?;
        let mut traversal = Traversal::new(self);
        traversal.run_from(src, None);
        Ok(traversal)
    }

    /// Shortest path from `source` to `target`, both ends included, using
    /// this graph's [`PathConfig`].
    pub fn shortest_path(&self, source: Label, target: Label) -> Result<Vec<Vertex>> {
        self.shortest_path_with(source, target, self.config())
    }

    /// Shortest path with explicit options.
    ///
    /// `source == target` yields the single vertex `Vertex::source(target)`
    /// without traversing. An unreached target fails with
    /// [`GraphError::NoPath`] unless the policy is
    /// [`UnreachablePolicy::Truncated`].
    pub fn shortest_path_with(
        &self,
        source: Label,
        target: Label,
        config: &PathConfig,
    ) -> Result<Vec<Vertex>> {
        let src = self.index_of(source)?;
        let dst = self.index_of(target)?;

        if src == dst {
            return Ok(vec![Vertex::source(target)]);
        }

        let mut traversal = Traversal::new(self);
        traversal.run_from(src, config.early_exit.then_some(dst));

        if !traversal.state[dst].visited {
            match config.unreachable {
                UnreachablePolicy::Error => {
                    return Err(GraphError::NoPath {
                        from: source,
                        to: target,
                    });
                }
                UnreachablePolicy::Truncated => {
                    warn!(%source, goal = %target, "target unreachable, returning truncated path");
                }
            }
        }

        Ok(traversal.walk_back(dst))
    }
}
