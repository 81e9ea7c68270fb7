use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the route finder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an endpoint key is absent from the lookup table.
    #[error("unknown key: {key}{}", format_suggestions(.suggestions))]
    KeyNotFound {
        key: String,
        suggestions: Vec<String>,
    },

    /// Raised when both endpoints exist but no directed path connects them.
    #[error("no route found between {origin} and {destination}")]
    NoRouteReachable { origin: String, destination: String },

    /// Raised when keys on a reconstructed route no longer resolve to entities.
    #[error("route could not be fully resolved; missing: {}", .missing.join(", "))]
    PartialResolution { missing: Vec<String> },

    /// Raised when a route summary is requested for a route without stops.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when an edge weight is negative, NaN, or infinite.
    #[error("invalid edge weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    /// Raised when an edge references a vertex that does not belong to the graph.
    #[error("vertex {index} does not exist in this graph")]
    UnknownVertex { index: usize },

    /// Raised when the serialized query worker has shut down.
    #[error("path finder worker is no longer running")]
    WorkerUnavailable,

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a dataset file is present but cannot be interpreted.
    #[error("invalid dataset {path}: {message}")]
    DatasetFormat { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
