use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{Error, Result};

/// Dense handle for a vertex stored in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex inside the graph arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Whether an inserted connection is one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeType {
    Directed,
    Undirected,
}

/// Weighted, directed edge within the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: f64,
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.weight.partial_cmp(&other.weight)? {
            Ordering::Equal => Some(
                self.source
                    .cmp(&other.source)
                    .then_with(|| self.destination.cmp(&other.destination)),
            ),
            ordering => Some(ordering),
        }
    }
}

/// Adjacency-list graph over deduplicated payloads.
///
/// Vertices live in an arena and are addressed by [`VertexId`]; the payload
/// index guarantees that equal payloads always map to the same vertex.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<T>,
    index: HashMap<T, VertexId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `vertices` payloads.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Return the vertex for `payload`, creating it on first use.
    pub fn create_vertex(&mut self, payload: T) -> VertexId {
        if let Some(&existing) = self.index.get(&payload) {
            return existing;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(payload.clone());
        self.adjacency.push(Vec::new());
        self.index.insert(payload, id);
        id
    }

    /// Lookup the vertex holding `payload` without creating it.
    pub fn vertex<Q>(&self, payload: &Q) -> Option<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(payload).copied()
    }

    /// Insert a weighted connection between two existing vertices.
    pub fn add_edge(
        &mut self,
        kind: EdgeType,
        source: VertexId,
        destination: VertexId,
        weight: f64,
    ) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        self.ensure_vertex(source)?;
        self.ensure_vertex(destination)?;

        match kind {
            EdgeType::Directed => self.push_edge(source, destination, weight),
            EdgeType::Undirected => {
                self.push_edge(source, destination, weight);
                self.push_edge(destination, source, weight);
            }
        }
        Ok(())
    }

    fn ensure_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::UnknownVertex { index: vertex.0 })
        }
    }

    fn push_edge(&mut self, source: VertexId, destination: VertexId, weight: f64) {
        self.adjacency[source.0].push(Edge {
            source,
            destination,
            weight,
        });
        self.edge_count += 1;
    }
}

impl<T> Graph<T> {
    /// Payload stored for `vertex`.
    pub fn payload(&self, vertex: VertexId) -> Option<&T> {
        self.vertices.get(vertex.0)
    }

    /// Outgoing edges of `source`, in insertion order.
    pub fn edges(&self, source: VertexId) -> &[Edge] {
        self.adjacency
            .get(source.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the cheapest edge from `source` to `destination`, if one exists.
    pub fn weight(&self, source: VertexId, destination: VertexId) -> Option<f64> {
        self.edges(source)
            .iter()
            .filter(|edge| edge.destination == destination)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &T)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, payload)| (VertexId(index), payload))
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, payload) in self.vertices() {
            let edges = self.edges(vertex);
            let targets = edges
                .iter()
                .map(|edge| self.vertices[edge.destination.0].to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{} ---> [ {} ] {}", payload, targets, edges.len())?;
        }
        Ok(())
    }
}
