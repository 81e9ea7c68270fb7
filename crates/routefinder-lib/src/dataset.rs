//! Data providers feeding the path finder.
//!
//! A provider hands over the entity and link lists once, at construction
//! time. [`CsvDataset`] reads the airport/route CSV layout from a directory;
//! [`StaticProvider`] wraps lists that are already in memory.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::entity::{Airport, Entity, RouteLink};
use crate::error::{Error, Result};

/// File name of the airport table inside a dataset directory.
pub const AIRPORTS_FILE: &str = "airports.csv";
/// File name of the route table inside a dataset directory.
pub const ROUTES_FILE: &str = "routes.csv";

/// Placeholder used by the source data for airports without an IATA code.
const MISSING_CODE: &str = "\\N";

/// Source of the entity and edge lists used to build a graph.
pub trait DataProvider {
    type Entity: Entity;

    fn entities(&self) -> Result<Vec<Self::Entity>>;

    fn links(&self) -> Result<Vec<RouteLink>>;
}

/// Provider over lists that are already loaded.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider<E> {
    entities: Vec<E>,
    links: Vec<RouteLink>,
}

impl<E: Entity> StaticProvider<E> {
    pub fn new(entities: Vec<E>, links: Vec<RouteLink>) -> Self {
        Self { entities, links }
    }
}

impl<E: Entity> DataProvider for StaticProvider<E> {
    type Entity = E;

    fn entities(&self) -> Result<Vec<E>> {
        Ok(self.entities.clone())
    }

    fn links(&self) -> Result<Vec<RouteLink>> {
        Ok(self.links.clone())
    }
}

/// Airport dataset stored as `airports.csv` and `routes.csv` in one directory.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    root: PathBuf,
}

impl CsvDataset {
    /// Open a dataset directory, checking that both tables are present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let dataset = Self { root: root.into() };
        for path in [dataset.airports_path(), dataset.routes_path()] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path });
            }
        }
        debug!(root = %dataset.root.display(), "opened csv dataset");
        Ok(dataset)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn airports_path(&self) -> PathBuf {
        self.root.join(AIRPORTS_FILE)
    }

    pub fn routes_path(&self) -> PathBuf {
        self.root.join(ROUTES_FILE)
    }
}

impl DataProvider for CsvDataset {
    type Entity = Airport;

    fn entities(&self) -> Result<Vec<Airport>> {
        let path = self.airports_path();
        read_airports(File::open(&path)?, &path)
    }

    fn links(&self) -> Result<Vec<RouteLink>> {
        let path = self.routes_path();
        read_routes(File::open(&path)?, &path)
    }
}

/// Parse airport rows: `name,city,country,code,latitude,longitude`.
///
/// The header row is skipped, rows whose code is `\N` are dropped, and
/// coordinates that fail to parse default to `0.0`.
pub fn read_airports<R: Read>(reader: R, source: &Path) -> Result<Vec<Airport>> {
    let mut airports = Vec::new();
    let mut dropped = 0usize;

    for (line, record) in csv_reader(reader).records().enumerate() {
        let record = record?;
        let [name, city, country, code] = required_fields::<4>(&record, source, line)?;
        if code.is_empty() || code == MISSING_CODE {
            dropped += 1;
            continue;
        }

        airports.push(Airport {
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            code: code.to_string(),
            latitude: parse_coordinate(record.get(4)),
            longitude: parse_coordinate(record.get(5)),
        });
    }

    debug!(
        source = %source.display(),
        loaded = airports.len(),
        dropped,
        "parsed airports"
    );
    Ok(airports)
}

/// Parse route rows: `airline,origin,destination[,weight]`.
///
/// A missing or unparsable weight column leaves the link unweighted.
pub fn read_routes<R: Read>(reader: R, source: &Path) -> Result<Vec<RouteLink>> {
    let mut links = Vec::new();

    for (line, record) in csv_reader(reader).records().enumerate() {
        let record = record?;
        let [airline, origin, destination] = required_fields::<3>(&record, source, line)?;
        if origin.is_empty() || destination.is_empty() {
            warn!(
                line = line + 2,
                source = %source.display(),
                "skipping route with empty endpoint"
            );
            continue;
        }

        links.push(RouteLink {
            airline: (!airline.is_empty()).then(|| airline.to_string()),
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight: parse_weight(record.get(3)),
        });
    }

    debug!(source = %source.display(), loaded = links.len(), "parsed routes");
    Ok(links)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

// `line` counts data rows from zero; the header occupies line 1.
fn required_fields<'r, const N: usize>(
    record: &'r StringRecord,
    source: &Path,
    line: usize,
) -> Result<[&'r str; N]> {
    let mut fields = [""; N];
    for (index, field) in fields.iter_mut().enumerate() {
        *field = record.get(index).ok_or_else(|| Error::DatasetFormat {
            path: source.to_path_buf(),
            message: format!("line {}: expected at least {} columns", line + 2, N),
        })?;
    }
    Ok(fields)
}

fn parse_coordinate(value: Option<&str>) -> f64 {
    value
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn parse_weight(value: Option<&str>) -> Option<f64> {
    value
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<f64>().ok())
}
