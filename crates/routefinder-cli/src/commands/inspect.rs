//! Inspect command: graph counters or the outgoing links of one key.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use routefinder_lib::{Airport, Entity, Error as LibError, FinderOptions, GraphStats, PathFinder};

use crate::commands::load_finder;
use crate::output::{write_json, OutputFormat};

/// One outgoing link as printed by `inspect --key`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbour {
    pub key: String,
    pub label: String,
    pub weight: f64,
}

/// Outgoing links of a single key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyReport {
    pub key: String,
    pub label: String,
    pub outgoing: Vec<Neighbour>,
}

pub fn handle_inspect_command(
    data_dir: &Path,
    key: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let finder = load_finder(data_dir, FinderOptions::default())?;
    let mut out = io::stdout().lock();

    match key {
        None => write_stats(&mut out, &finder.stats(), format)?,
        Some(key) => {
            let report = key_report(&finder, key)?;
            write_key_report(&mut out, &report, format)?;
        }
    }
    Ok(())
}

pub fn key_report(finder: &PathFinder<Airport>, key: &str) -> Result<KeyReport> {
    let (Some(entity), Some(edges)) = (finder.entity(key), finder.outgoing(key)) else {
        return Err(LibError::KeyNotFound {
            key: key.to_string(),
            suggestions: finder.suggest(key),
        }
        .into());
    };

    let graph = finder.graph();
    let outgoing = edges
        .iter()
        .filter_map(|edge| {
            let neighbour_key = graph.payload(edge.destination)?;
            Some(Neighbour {
                label: finder
                    .entity(neighbour_key)
                    .map(|neighbour| neighbour.label())
                    .unwrap_or_else(|| neighbour_key.clone()),
                key: neighbour_key.clone(),
                weight: edge.weight,
            })
        })
        .collect();

    Ok(KeyReport {
        key: entity.key().to_string(),
        label: entity.label(),
        outgoing,
    })
}

fn write_stats<W: Write>(out: &mut W, stats: &GraphStats, format: OutputFormat) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, stats);
    }
    writeln!(out, "vertices: {}", stats.vertices)?;
    writeln!(out, "edges: {}", stats.edges)?;
    writeln!(out, "skipped links: {}", stats.skipped_links)?;
    writeln!(out, "duplicate keys: {}", stats.duplicate_keys)
}

fn write_key_report<W: Write>(
    out: &mut W,
    report: &KeyReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Basic => {
            for neighbour in &report.outgoing {
                writeln!(out, "{}", neighbour.key)?;
            }
            Ok(())
        }
        OutputFormat::Text => {
            writeln!(out, "{} ({} outgoing)", report.label, report.outgoing.len())?;
            for neighbour in &report.outgoing {
                writeln!(
                    out,
                    "  -> {} {} (weight {})",
                    neighbour.key, neighbour.label, neighbour.weight
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> KeyReport {
        KeyReport {
            key: "A".into(),
            label: "Alpha".into(),
            outgoing: vec![Neighbour {
                key: "B".into(),
                label: "Bravo".into(),
                weight: 1.0,
            }],
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_key_report(&mut buffer, &report(), format).expect("write");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn text_report_lists_neighbours() {
        assert_eq!(
            render(OutputFormat::Text),
            "Alpha (1 outgoing)\n  -> B Bravo (weight 1)\n"
        );
    }

    #[test]
    fn basic_report_lists_keys() {
        assert_eq!(render(OutputFormat::Basic), "B\n");
    }

    #[test]
    fn stats_text_lists_counters() {
        let stats = GraphStats {
            vertices: 3,
            edges: 2,
            skipped_links: 1,
            duplicate_keys: 0,
        };
        let mut buffer = Vec::new();
        write_stats(&mut buffer, &stats, OutputFormat::Text).expect("write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.contains("vertices: 3"));
        assert!(text.contains("skipped links: 1"));
    }
}
