//! Single-source shortest paths over a [`Graph`].
//!
//! A search produces a [`PathsTable`]: for every reached vertex the edge that
//! currently represents its best known route, with the origin marked as
//! [`Visit::Start`]. Routes are rebuilt from the table by walking those
//! predecessor edges backwards.

use std::cell::RefCell;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, VertexId};
use crate::queue::{PriorityQueue, Queue};

/// Predecessor marker recorded for a reached vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit {
    /// The vertex is the origin of the traversal.
    Start,
    /// The vertex is best reached through this edge.
    ReachedVia(Edge),
}

/// Per-query mapping from vertex to its [`Visit`].
///
/// Vertices without an entry were not reached from the start vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct PathsTable {
    start: VertexId,
    visits: Vec<Option<Visit>>,
}

impl PathsTable {
    fn new(start: VertexId, vertex_count: usize) -> Self {
        let mut visits = vec![None; vertex_count];
        visits[start.index()] = Some(Visit::Start);
        Self { start, visits }
    }

    /// Vertex the traversal started from.
    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn visit(&self, vertex: VertexId) -> Option<&Visit> {
        self.visits.get(vertex.index()).and_then(Option::as_ref)
    }

    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.visit(vertex).is_some()
    }

    /// Number of vertices reached, including the start vertex.
    pub fn reached_count(&self) -> usize {
        self.visits.iter().filter(|visit| visit.is_some()).count()
    }

    /// Total weight of the recorded route to `vertex`.
    ///
    /// Computed by walking the predecessor chain back to the start.
    pub fn distance_to(&self, vertex: VertexId) -> Option<f64> {
        self.visit(vertex)?;
        Some(path_weight(&reconstruct_path(vertex, self)))
    }

    fn walk_distance(&self, vertex: VertexId) -> f64 {
        self.distance_to(vertex).unwrap_or(f64::INFINITY)
    }

    fn record(&mut self, edge: Edge) {
        self.visits[edge.destination.index()] = Some(Visit::ReachedVia(edge));
    }
}

/// How queued vertices are prioritised during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Cached per-vertex distances; stale queue entries are skipped on dequeue.
    #[default]
    Cached,
    /// Legacy ordering: every comparison re-walks the live paths table.
    ///
    /// Each comparison costs O(path length). Queued entries are not moved when
    /// their cost drops; the vertex is enqueued again instead.
    PathWalk,
}

/// Shortest-path engine bound to one graph.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPaths<'g, T> {
    graph: &'g Graph<T>,
    strategy: SearchStrategy,
}

impl<'g, T> ShortestPaths<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self {
            graph,
            strategy: SearchStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Build the paths table covering every vertex reachable from `start`.
    pub fn shortest_path(&self, start: VertexId) -> Result<PathsTable> {
        if self.graph.payload(start).is_none() {
            return Err(Error::UnknownVertex {
                index: start.index(),
            });
        }

        let paths = match self.strategy {
            SearchStrategy::Cached => self.search_cached(start),
            SearchStrategy::PathWalk => self.search_path_walk(start),
        };

        debug!(
            start = %start,
            strategy = ?self.strategy,
            reached = paths.reached_count(),
            "shortest path search complete"
        );
        Ok(paths)
    }

    /// Edges leading from the table's start vertex to `destination`.
    pub fn reconstruct_path(&self, destination: VertexId, paths: &PathsTable) -> Vec<Edge> {
        reconstruct_path(destination, paths)
    }

    fn search_cached(&self, start: VertexId) -> PathsTable {
        let vertex_count = self.graph.vertex_count();
        let mut paths = PathsTable::new(start, vertex_count);
        let mut distances = vec![f64::INFINITY; vertex_count];
        distances[start.index()] = 0.0;

        let mut queue = PriorityQueue::new(|a: &QueueEntry, b: &QueueEntry| {
            a.cost < b.cost || (a.cost == b.cost && a.vertex < b.vertex)
        });
        queue.enqueue(QueueEntry {
            vertex: start,
            cost: 0.0,
        });

        while let Some(entry) = queue.dequeue() {
            if entry.cost > distances[entry.vertex.index()] {
                continue;
            }

            for edge in self.graph.edges(entry.vertex) {
                let next = edge.destination;
                let candidate = entry.cost + edge.weight;
                if !paths.is_reached(next) || candidate < distances[next.index()] {
                    distances[next.index()] = candidate;
                    paths.record(*edge);
                    queue.enqueue(QueueEntry {
                        vertex: next,
                        cost: candidate,
                    });
                }
            }
        }

        paths
    }

    fn search_path_walk(&self, start: VertexId) -> PathsTable {
        let paths = RefCell::new(PathsTable::new(start, self.graph.vertex_count()));
        let mut queue = PriorityQueue::new(|a: &VertexId, b: &VertexId| {
            let table = paths.borrow();
            table.walk_distance(*a) < table.walk_distance(*b)
        });
        queue.enqueue(start);

        while let Some(vertex) = queue.dequeue() {
            for edge in self.graph.edges(vertex) {
                let relax = {
                    let table = paths.borrow();
                    match table.distance_to(edge.destination) {
                        None => true,
                        Some(current) => table.walk_distance(vertex) + edge.weight < current,
                    }
                };
                if relax {
                    paths.borrow_mut().record(*edge);
                    queue.enqueue(edge.destination);
                }
            }
        }

        drop(queue);
        paths.into_inner()
    }
}

/// Walk backwards from `destination` and return the route in travel order.
///
/// Returns an empty path both when `destination` was not reached and when it
/// is the start vertex; callers have to tell those apart.
pub fn reconstruct_path(destination: VertexId, paths: &PathsTable) -> Vec<Edge> {
    let mut path = Vec::new();
    let mut vertex = destination;
    while let Some(Visit::ReachedVia(edge)) = paths.visit(vertex) {
        path.push(*edge);
        vertex = edge.source;
    }
    path.reverse();
    path
}

/// Sum of edge weights along a path.
pub fn path_weight(path: &[Edge]) -> f64 {
    path.iter().map(|edge| edge.weight).sum()
}

#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    vertex: VertexId,
    cost: f64,
}
