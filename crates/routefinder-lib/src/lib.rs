//! Route finder library entry points.
//!
//! This crate builds a weighted directed graph from entity and link lists,
//! runs single-source shortest-path searches over it, and maps the resulting
//! edge paths back to ordered entities. Higher-level consumers (the CLI, any
//! rendering layer) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod dataset;
pub mod entity;
pub mod error;
pub mod finder;
pub mod graph;
pub mod heap;
pub mod output;
pub mod path;
pub mod queue;

pub use dataset::{CsvDataset, DataProvider, StaticProvider};
pub use entity::{Airport, Coordinate, Entity, RouteLink};
pub use error::{Error, Result};
pub use finder::{FinderOptions, GraphStats, PathFinder};
pub use graph::{Edge, EdgeType, Graph, VertexId};
pub use heap::Heap;
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{path_weight, reconstruct_path, PathsTable, SearchStrategy, ShortestPaths, Visit};
pub use queue::{PriorityQueue, Queue};
