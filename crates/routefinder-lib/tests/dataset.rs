mod common;

use std::fs;

use routefinder_lib::{CsvDataset, DataProvider, Error};
use tempfile::tempdir;

use common::airport_dataset;

#[test]
fn fixture_dataset_loads_airports_and_routes() {
    let dataset = airport_dataset();
    let airports = dataset.entities().expect("airports parse");
    let routes = dataset.links().expect("routes parse");

    assert_eq!(airports.len(), 10);
    assert!(airports.iter().all(|airport| airport.code != "\\N"));
    let heathrow = airports
        .iter()
        .find(|airport| airport.code == "LHR")
        .expect("LHR present");
    assert_eq!(heathrow.country, "United Kingdom");
    assert!((heathrow.latitude - 51.4706).abs() < 1e-9);

    assert_eq!(routes.len(), 15);
    assert_eq!(routes[0].airline.as_deref(), Some("BA"));
}

#[test]
fn missing_directory_is_reported() {
    let temp = tempdir().expect("create temp dir");
    let error = CsvDataset::open(temp.path().join("absent")).expect_err("no dataset");
    assert!(matches!(error, Error::DatasetNotFound { .. }));
}

#[test]
fn missing_routes_table_is_reported() {
    let temp = tempdir().expect("create temp dir");
    fs::write(
        temp.path().join("airports.csv"),
        "name,city,country,code,lat,long\n",
    )
    .expect("write airports");

    match CsvDataset::open(temp.path()) {
        Err(Error::DatasetNotFound { path }) => assert!(path.ends_with("routes.csv")),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn header_only_tables_yield_empty_lists() {
    let temp = tempdir().expect("create temp dir");
    fs::write(
        temp.path().join("airports.csv"),
        "name,city,country,code,lat,long\n",
    )
    .expect("write airports");
    fs::write(temp.path().join("routes.csv"), "airline,origin,destination\n")
        .expect("write routes");

    let dataset = CsvDataset::open(temp.path()).expect("dataset opens");
    assert!(dataset.entities().unwrap().is_empty());
    assert!(dataset.links().unwrap().is_empty());
}
