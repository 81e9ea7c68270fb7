//! Route command handler for computing paths between airports.

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use routefinder_lib::{FinderOptions, RouteSummary, SearchStrategy};

use crate::commands::load_finder;
use crate::output::{write_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin key.
    pub from: String,
    /// Destination key.
    pub to: String,
    /// Queue ordering used by the search.
    pub strategy: StrategyArg,
}

/// Search strategy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    /// Per-vertex distance cache with lazy deletion.
    #[default]
    Cached,
    /// Distance recomputed by walking the paths table on every comparison.
    PathWalk,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Cached => SearchStrategy::Cached,
            StrategyArg::PathWalk => SearchStrategy::PathWalk,
        }
    }
}

impl RouteCommandArgs {
    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions {
            strategy: self.strategy.into(),
            ..FinderOptions::default()
        }
    }
}

/// Resolve the route and print it to stdout.
pub async fn handle_route_command(
    data_dir: &Path,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let finder = load_finder(data_dir, args.finder_options())?;
    let route = finder.find_path(&args.from, &args.to).await?;
    let weight = finder.route_weight(&route);
    let summary = RouteSummary::from_entities(&route, weight)?;

    info!(
        origin = %summary.origin,
        destination = %summary.destination,
        hops = summary.hops,
        "route resolved"
    );

    write_route(&mut io::stdout().lock(), &summary, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_maps_onto_library_enum() {
        assert_eq!(SearchStrategy::from(StrategyArg::Cached), SearchStrategy::Cached);
        assert_eq!(
            SearchStrategy::from(StrategyArg::PathWalk),
            SearchStrategy::PathWalk
        );
    }

    #[test]
    fn options_keep_unit_weight() {
        let args = RouteCommandArgs {
            from: "LHR".into(),
            to: "SYD".into(),
            strategy: StrategyArg::PathWalk,
        };
        let options = args.finder_options();
        assert_eq!(options.default_weight, 1.0);
        assert_eq!(options.strategy, SearchStrategy::PathWalk);
    }
}
