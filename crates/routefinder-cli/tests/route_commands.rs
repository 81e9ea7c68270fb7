use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/airports")
        .canonicalize()
        .expect("fixture dataset present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("routefinder");
    cmd.env("RUST_LOG", "error")
        .env_remove("ROUTEFINDER_DATA_DIR")
        .arg("--data-dir")
        .arg(fixture_dir());
    cmd
}

#[test]
fn text_route_lists_every_stop() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "LHR", "--to", "SYD"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Route: LHR -> SYD (4 hops, weight 4)"))
        .stdout(predicate::str::contains("London Heathrow LHR"))
        .stdout(predicate::str::contains("Frankfurt Frankfurt am Main Airport FRA"));
}

#[test]
fn basic_format_outputs_minimal_path() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "basic", "route", "--from", "LHR", "--to", "SYD"]);

    cmd.assert()
        .success()
        .stdout("+ LHR\n| CDG\n| FRA\n| HND\n- SYD\n");
}

#[test]
fn path_walk_strategy_gives_same_route() {
    let mut cmd = prepare_command();
    cmd.args([
        "--format",
        "basic",
        "route",
        "--from",
        "LHR",
        "--to",
        "SYD",
        "--strategy",
        "path-walk",
    ]);

    cmd.assert()
        .success()
        .stdout("+ LHR\n| CDG\n| FRA\n| HND\n- SYD\n");
}

#[test]
fn json_output_is_machine_readable() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "KEF", "--to", "LAX"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["origin"], "KEF");
    assert_eq!(value["destination"], "LAX");
    assert_eq!(value["hops"], 2);
    assert_eq!(value["steps"][1]["key"], "JFK");
}

#[test]
fn same_origin_and_destination_is_a_single_stop() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "basic", "route", "--from", "HND", "--to", "HND"]);

    cmd.assert().success().stdout("+ HND\n");
}

#[test]
fn unknown_key_suggests_close_match() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "LHX", "--to", "SYD"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown key: LHX"))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("LHR"));
}

#[test]
fn unreachable_destination_fails() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "LHR", "--to", "LYR"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no route found between LHR and LYR"));
}

#[test]
fn missing_dataset_reports_path() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("routefinder");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp.path())
        .args(["route", "--from", "LHR", "--to", "SYD"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("dataset not found"));
}

#[test]
fn data_dir_can_come_from_environment() {
    let mut cmd = cargo_bin_cmd!("routefinder");
    cmd.env("RUST_LOG", "error")
        .env("ROUTEFINDER_DATA_DIR", fixture_dir())
        .args(["--format", "basic", "route", "--from", "JFK", "--to", "ORD"]);

    cmd.assert().success().stdout("+ JFK\n- ORD\n");
}
