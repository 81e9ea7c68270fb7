//! Path finder service: key resolution, search, and entity mapping.
//!
//! Queries are funnelled through a single dedicated worker thread in FIFO
//! order, so at most one search runs at a time. The graph and lookup table
//! are built once in [`PathFinder::with_options`] and are read-only after
//! that; every query allocates its own paths table and queue.
//!
//! # Example
//!
//! ```no_run
//! use routefinder_lib::{PathFinder, RouteLink};
//!
//! # async fn demo() -> routefinder_lib::Result<()> {
//! let entities = vec!["A".to_string(), "B".to_string()];
//! let finder = PathFinder::new(entities, vec![RouteLink::new("A", "B")])?;
//! let route = finder.find_path("A", "B").await?;
//! assert_eq!(route, vec!["A".to_string(), "B".to_string()]);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::dataset::DataProvider;
use crate::entity::{Entity, RouteLink};
use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeType, Graph, VertexId};
use crate::path::{SearchStrategy, ShortestPaths};

/// Maximum number of "did you mean" suggestions attached to a lookup failure.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a key to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Construction options for [`PathFinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderOptions {
    /// Weight for links that do not carry their own.
    pub default_weight: f64,
    /// Queue ordering used by the shortest-path engine.
    pub strategy: SearchStrategy,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            default_weight: 1.0,
            strategy: SearchStrategy::Cached,
        }
    }
}

/// Counters collected while building the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    /// Links dropped because an endpoint key was unknown.
    pub skipped_links: usize,
    /// Entities dropped because their key was already taken.
    pub duplicate_keys: usize,
}

/// Read-only state shared between the handle and the worker.
struct RouteIndex<E> {
    graph: Graph<String>,
    entities: Vec<E>,
    lookup: HashMap<String, VertexId>,
    strategy: SearchStrategy,
    stats: GraphStats,
}

struct Query<E> {
    origin: String,
    destination: String,
    reply: oneshot::Sender<Result<Vec<E>>>,
}

/// Finds shortest routes between entities on a serialized worker.
pub struct PathFinder<E: Entity> {
    index: Arc<RouteIndex<E>>,
    sender: mpsc::UnboundedSender<Query<E>>,
}

impl<E: Entity> PathFinder<E> {
    /// Build a finder with default options.
    pub fn new(entities: Vec<E>, links: Vec<RouteLink>) -> Result<Self> {
        Self::with_options(entities, links, FinderOptions::default())
    }

    /// Build a finder from whatever a [`DataProvider`] supplies.
    pub fn from_provider<P>(provider: &P, options: FinderOptions) -> Result<Self>
    where
        P: DataProvider<Entity = E>,
    {
        Self::with_options(provider.entities()?, provider.links()?, options)
    }

    /// Build the graph and lookup table, then start the query worker.
    pub fn with_options(
        entities: Vec<E>,
        links: Vec<RouteLink>,
        options: FinderOptions,
    ) -> Result<Self> {
        let index = Arc::new(RouteIndex::build(entities, &links, options)?);
        let (sender, receiver) = mpsc::unbounded_channel();

        let worker_index = Arc::clone(&index);
        thread::Builder::new()
            .name("path-finder".to_string())
            .spawn(move || run_worker(worker_index, receiver))?;

        Ok(Self { index, sender })
    }

    /// Ordered entities from `origin` to `destination`, both inclusive.
    ///
    /// Asking for a route from a key to itself yields that single entity.
    pub async fn find_path(&self, origin: &str, destination: &str) -> Result<Vec<E>> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Query {
                origin: origin.to_string(),
                destination: destination.to_string(),
                reply,
            })
            .map_err(|_| Error::WorkerUnavailable)?;

        response.await.map_err(|_| Error::WorkerUnavailable)?
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.lookup.contains_key(key)
    }

    pub fn entity(&self, key: &str) -> Option<&E> {
        self.index.entity(key)
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.index.graph
    }

    pub fn stats(&self) -> GraphStats {
        self.index.stats
    }

    /// Total weight along consecutive stops, or `None` if a hop has no edge.
    ///
    /// Each hop is charged its cheapest link, which is the one a search takes.
    pub fn route_weight(&self, route: &[E]) -> Option<f64> {
        let graph = &self.index.graph;
        route.windows(2).try_fold(0.0, |total, pair| {
            let source = self.index.lookup.get(pair[0].key())?;
            let destination = self.index.lookup.get(pair[1].key())?;
            Some(total + graph.weight(*source, *destination)?)
        })
    }

    /// Up to three known keys that resemble `key`, closest first.
    pub fn suggest(&self, key: &str) -> Vec<String> {
        self.index.suggestions(key)
    }

    /// Outgoing edges of `key`, if the key exists.
    pub fn outgoing(&self, key: &str) -> Option<&[Edge]> {
        let vertex = self.index.lookup.get(key)?;
        Some(self.index.graph.edges(*vertex))
    }
}

impl<E: Entity> std::fmt::Debug for PathFinder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathFinder")
            .field("stats", &self.index.stats)
            .field("strategy", &self.index.strategy)
            .finish_non_exhaustive()
    }
}

fn run_worker<E: Entity>(
    index: Arc<RouteIndex<E>>,
    mut receiver: mpsc::UnboundedReceiver<Query<E>>,
) {
    debug!("path finder worker started");
    while let Some(query) = receiver.blocking_recv() {
        let result = index.find_path(&query.origin, &query.destination);
        if query.reply.send(result).is_err() {
            debug!(
                origin = %query.origin,
                destination = %query.destination,
                "caller dropped before result was delivered"
            );
        }
    }
    debug!("path finder worker stopped");
}

impl<E: Entity> RouteIndex<E> {
    fn build(entities: Vec<E>, links: &[RouteLink], options: FinderOptions) -> Result<Self> {
        let mut graph = Graph::with_capacity(entities.len());
        let mut lookup = HashMap::with_capacity(entities.len());
        let mut kept = Vec::with_capacity(entities.len());
        let mut duplicate_keys = 0usize;

        for entity in entities {
            let key = entity.key().to_string();
            if lookup.contains_key(&key) {
                warn!(key = %key, "duplicate entity key; keeping the first entry");
                duplicate_keys += 1;
                continue;
            }
            let vertex = graph.create_vertex(key.clone());
            lookup.insert(key, vertex);
            kept.push(entity);
        }

        let mut skipped_links = 0usize;
        for link in links {
            match (lookup.get(&link.origin), lookup.get(&link.destination)) {
                (Some(&source), Some(&destination)) => {
                    let weight = link.weight.unwrap_or(options.default_weight);
                    graph.add_edge(EdgeType::Directed, source, destination, weight)?;
                }
                _ => {
                    debug!(
                        origin = %link.origin,
                        destination = %link.destination,
                        "skipping link with unknown endpoint"
                    );
                    skipped_links += 1;
                }
            }
        }
        if skipped_links > 0 {
            warn!(skipped_links, "links referenced unknown keys and were skipped");
        }

        let stats = GraphStats {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            skipped_links,
            duplicate_keys,
        };
        debug!(?stats, "route graph built");

        Ok(Self {
            graph,
            entities: kept,
            lookup,
            strategy: options.strategy,
            stats,
        })
    }

    fn entity(&self, key: &str) -> Option<&E> {
        let vertex = self.lookup.get(key)?;
        self.entities.get(vertex.index())
    }

    fn find_path(&self, origin: &str, destination: &str) -> Result<Vec<E>> {
        let start = self.resolve(origin)?;
        let goal = self.resolve(destination)?;
        debug!(origin, destination, "resolved route endpoints");

        if start == goal {
            return self.resolve_entities(&[origin.to_string()]);
        }

        let engine = ShortestPaths::new(&self.graph).with_strategy(self.strategy);
        let paths = engine.shortest_path(start)?;
        let edges = engine.reconstruct_path(goal, &paths);
        if edges.is_empty() {
            return Err(Error::NoRouteReachable {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }

        let keys = self.route_keys(&edges);
        debug!(hops = edges.len(), "route reconstructed");
        self.resolve_entities(&keys)
    }

    fn resolve(&self, key: &str) -> Result<VertexId> {
        self.lookup
            .get(key)
            .copied()
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
                suggestions: self.suggestions(key),
            })
    }

    /// Source key of every edge, plus the destination of the last one.
    fn route_keys(&self, edges: &[Edge]) -> Vec<String> {
        let mut keys = Vec::with_capacity(edges.len() + 1);
        for (position, edge) in edges.iter().enumerate() {
            keys.extend(self.graph.payload(edge.source).cloned());
            if position == edges.len() - 1 {
                keys.extend(self.graph.payload(edge.destination).cloned());
            }
        }
        keys
    }

    fn resolve_entities(&self, keys: &[String]) -> Result<Vec<E>> {
        let mut resolved = Vec::with_capacity(keys.len());
        let mut missing = Vec::new();
        for key in keys {
            match self.entity(key) {
                Some(entity) => resolved.push(entity.clone()),
                None => missing.push(key.clone()),
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(Error::PartialResolution { missing })
        }
    }

    fn suggestions(&self, key: &str) -> Vec<String> {
        let needle = key.to_ascii_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .lookup
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_ascii_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(keys: &[&str], links: &[(&str, &str)]) -> RouteIndex<String> {
        let entities = keys.iter().map(|k| k.to_string()).collect();
        let links: Vec<_> = links.iter().map(|(a, b)| RouteLink::new(*a, *b)).collect();
        RouteIndex::build(entities, &links, FinderOptions::default()).unwrap()
    }

    #[test]
    fn route_keys_flatten_edges() {
        let index = index(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let start = index.lookup["A"];
        let goal = index.lookup["C"];
        let engine = ShortestPaths::new(&index.graph);
        let paths = engine.shortest_path(start).unwrap();
        let edges = engine.reconstruct_path(goal, &paths);

        assert_eq!(index.route_keys(&edges), vec!["A", "B", "C"]);
        assert_eq!(index.route_keys(&edges[..1]), vec!["A", "B"]);
        assert!(index.route_keys(&[]).is_empty());
    }

    #[test]
    fn unresolvable_keys_are_reported() {
        let index = index(&["A"], &[]);
        let error = index
            .resolve_entities(&["A".to_string(), "ZZZ".to_string()])
            .expect_err("missing key");
        match error {
            Error::PartialResolution { missing } => assert_eq!(missing, vec!["ZZZ"]),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn duplicate_keys_keep_first_entity() {
        let index = index(&["A", "A", "B"], &[("A", "B")]);
        assert_eq!(index.stats.vertices, 2);
        assert_eq!(index.stats.duplicate_keys, 1);
        assert_eq!(index.entities, vec!["A", "B"]);
    }

    #[test]
    fn links_to_unknown_keys_are_skipped() {
        let index = index(&["A", "B"], &[("A", "B"), ("A", "X"), ("Y", "B")]);
        assert_eq!(index.stats.edges, 1);
        assert_eq!(index.stats.skipped_links, 2);
    }

    #[test]
    fn suggestions_rank_close_keys() {
        let index = index(&["LAX", "LAS", "JFK", "LHR"], &[]);
        let suggestions = index.suggestions("LAZ");
        assert!(suggestions.contains(&"LAX".to_string()));
        assert!(suggestions.contains(&"LAS".to_string()));
        assert!(!suggestions.contains(&"JFK".to_string()));
    }

    #[test]
    fn invalid_default_weight_fails_construction() {
        let options = FinderOptions {
            default_weight: -1.0,
            ..FinderOptions::default()
        };
        let result = RouteIndex::build(
            vec!["A".to_string(), "B".to_string()],
            &[RouteLink::new("A", "B")],
            options,
        );
        assert!(matches!(result, Err(Error::InvalidWeight { .. })));
    }
}
