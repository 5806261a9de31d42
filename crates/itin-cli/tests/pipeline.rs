//! Integration tests for the pipeline module.

use std::fs;
use std::path::PathBuf;

use itin_cli::pipeline;

const LOOKUP_DATA: &str = "\
name,iso_country,municipality,icao_code,iata_code,coordinates
John F Kennedy International Airport,US,New York,KJFK,JFK,\"40.6413, -73.7781\"
Los Angeles International Airport,US,Los Angeles,KLAX,LAX,\"33.9416, -118.4085\"
";

struct TestDirs {
    _dir: tempfile::TempDir,
    input: PathBuf,
    output: PathBuf,
    lookup: PathBuf,
}

fn test_dirs() -> TestDirs {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    let lookup = dir.path().join("airport-lookup.csv");
    TestDirs {
        _dir: dir,
        input,
        output,
        lookup,
    }
}

#[test]
fn test_run_prettifies_document() {
    let dirs = test_dirs();
    fs::write(&dirs.lookup, LOOKUP_DATA).unwrap();
    fs::write(
        &dirs.input,
        "Your flight departs from #LAX on D(2024-03-05T10:00:00Z).\\f\
         You arrive at ##KJFK at T12(2024-03-05T18:30:00-05:00).\n\n\n\
         Enjoy *#JFK!\n",
    )
    .unwrap();

    let summary = pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap();

    let written = fs::read_to_string(&dirs.output).unwrap();
    assert_eq!(
        written,
        "Your flight departs from Los Angeles International Airport on 05 Mar 2024.\n\
         You arrive at John F Kennedy International Airport at 06:30pm (-05:00).\n\
         \n\
         Enjoy New York!\n"
    );
    assert_eq!(summary.codes, 4);
    assert_eq!(summary.lines, 4);
}

#[test]
fn test_run_leaves_unresolved_tokens_in_place() {
    let dirs = test_dirs();
    fs::write(&dirs.lookup, LOOKUP_DATA).unwrap();
    fs::write(&dirs.input, "Depart #QQQ at T24(broken)\n").unwrap();

    pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap();

    let written = fs::read_to_string(&dirs.output).unwrap();
    assert_eq!(written, "Depart #QQQ at broken\n");
}

#[test]
fn test_run_folds_crlf_input_to_newlines() {
    let dirs = test_dirs();
    fs::write(&dirs.lookup, LOOKUP_DATA).unwrap();
    fs::write(&dirs.input, "Depart #LAX\r\nArrive *##KJFK\r\n").unwrap();

    pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap();

    let written = fs::read_to_string(&dirs.output).unwrap();
    assert_eq!(
        written,
        "Depart Los Angeles International Airport\nArrive New York\n"
    );
}

#[test]
fn test_run_missing_input_is_classified() {
    let dirs = test_dirs();
    fs::write(&dirs.lookup, LOOKUP_DATA).unwrap();

    let error = pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap_err();

    assert!(error.to_string().starts_with("input not found"));
    assert!(!dirs.output.exists());
}

#[test]
fn test_run_missing_lookup_is_classified() {
    let dirs = test_dirs();
    fs::write(&dirs.input, "anything\n").unwrap();

    let error = pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap_err();

    assert!(error.to_string().starts_with("airport lookup not found"));
    assert!(!dirs.output.exists());
}

#[test]
fn test_run_malformed_lookup_aborts_before_writing() {
    let dirs = test_dirs();
    // Header is missing the icao_code column.
    fs::write(
        &dirs.lookup,
        "name,iso_country,municipality,iata_code\n\
         John F Kennedy International Airport,US,New York,JFK\n",
    )
    .unwrap();
    fs::write(&dirs.input, "Fly from #JFK\n").unwrap();

    let error = pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap_err();

    assert!(error.to_string().starts_with("airport lookup malformed"));
    assert!(!dirs.output.exists());
}

#[test]
fn test_run_blank_lookup_cell_aborts() {
    let dirs = test_dirs();
    fs::write(
        &dirs.lookup,
        "name,iso_country,municipality,icao_code,iata_code\n\
         John F Kennedy International Airport,US,,KJFK,JFK\n",
    )
    .unwrap();
    fs::write(&dirs.input, "Fly from #JFK\n").unwrap();

    let error = pipeline::run(&dirs.input, &dirs.output, &dirs.lookup).unwrap_err();

    assert!(error.to_string().starts_with("airport lookup malformed"));
    assert!(error.to_string().contains("municipality"));
}
