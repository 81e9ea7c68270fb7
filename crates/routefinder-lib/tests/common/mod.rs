// Shared helpers for routefinder-lib integration tests
#![allow(dead_code)]

use std::path::PathBuf;

use routefinder_lib::{CsvDataset, FinderOptions, PathFinder, RouteLink};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn airport_dataset() -> CsvDataset {
    CsvDataset::open(fixtures_dir().join("airports")).expect("fixture dataset present")
}

pub fn keys(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn links(pairs: &[(&str, &str)]) -> Vec<RouteLink> {
    pairs
        .iter()
        .map(|(origin, destination)| RouteLink::new(*origin, *destination))
        .collect()
}

pub fn weighted_links(triples: &[(&str, &str, f64)]) -> Vec<RouteLink> {
    triples
        .iter()
        .map(|(origin, destination, weight)| {
            RouteLink::new(*origin, *destination).with_weight(*weight)
        })
        .collect()
}

/// `A -> B -> C -> D` plus a direct `A -> C`, and an island `E <-> F`.
pub fn letter_finder(options: FinderOptions) -> PathFinder<String> {
    PathFinder::with_options(
        keys(&["A", "B", "C", "D", "E", "F"]),
        links(&[
            ("A", "B"),
            ("B", "C"),
            ("A", "C"),
            ("C", "D"),
            ("E", "F"),
            ("F", "E"),
        ]),
        options,
    )
    .expect("letter graph builds")
}
