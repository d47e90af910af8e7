/*!
 * Scenario Tests
 * Built-in scenario selection and JSON workload files
 */

use pretty_assertions::assert_eq;
use schedsim::scenario::{load_workload, WorkloadFile};
use schedsim::{ConfigError, Policy, ScenarioRef, SimConfig, SimError, Simulation, WorkloadError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_builtin_scenarios_resolve() {
    for (input, count) in [("1", 3), ("2", 6), ("3", 3), ("4", 3)] {
        let workload = ScenarioRef::parse(input).unwrap().load().unwrap();
        assert_eq!(workload.label(), input);
        assert_eq!(workload.len(), count);
    }
}

#[test]
fn test_unknown_scenario_ids_fail_before_loading() {
    for input in ["0", "5", "-1", "42", "1.5", "x"] {
        assert_eq!(
            ScenarioRef::parse(input),
            Err(ConfigError::UnknownScenario(input.to_string()))
        );
    }
}

#[test]
fn test_workload_file_round_trip() {
    let file = write_temp(
        r#"{
            "label": "mixed",
            "processes": [
                { "name": "cpu", "total_cpu": 3.0 },
                { "name": "io", "total_cpu": 2.0,
                  "io_events": [{ "when_cpu": 0.5, "duration": 1.0 }] }
            ]
        }"#,
    );

    let reference = ScenarioRef::parse(file.path().to_str().unwrap()).unwrap();
    assert!(matches!(reference, ScenarioRef::File(_)));

    let workload = reference.load().unwrap();
    assert_eq!(workload.label(), "mixed");
    let names: Vec<&str> = workload.processes().iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["cpu", "io"]);

    let report = Simulation::new(workload, SimConfig::default())
        .run(Policy::Fifo)
        .unwrap();
    let elapsed: Vec<f64> = report.records.iter().map(|r| r.elapsed).collect();
    assert_eq!(elapsed, vec![3.0, 6.0]);
    assert_eq!(report.records[1].blocked, 1.0);
}

#[test]
fn test_unlabelled_file_takes_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burst.json");
    std::fs::write(&path, r#"{"processes":[{"name":"A","total_cpu":1.0}]}"#).unwrap();

    let workload = load_workload(&path).unwrap();
    assert_eq!(workload.label(), "burst");
}

#[test]
fn test_exported_builtin_loads_back() {
    let builtin = ScenarioRef::parse("4").unwrap().load().unwrap();
    let json = serde_json::to_string_pretty(&WorkloadFile::from(&builtin)).unwrap();
    let file = write_temp(&json);

    let loaded = load_workload(file.path()).unwrap();
    assert_eq!(loaded.processes(), builtin.processes());
    assert_eq!(loaded.label(), "4");
}

#[test]
fn test_invalid_files_are_reported() {
    let duplicate = write_temp(
        r#"{"processes":[{"name":"A","total_cpu":1.0},{"name":"A","total_cpu":2.0}]}"#,
    );
    match load_workload(duplicate.path()) {
        Err(SimError::Workload(WorkloadError::DuplicateName(name))) => assert_eq!(name, "A"),
        other => panic!("expected duplicate name error, got {other:?}"),
    }

    let unordered = write_temp(
        r#"{"processes":[{"name":"A","total_cpu":4.0,
            "io_events":[{"when_cpu":2.0,"duration":1.0},{"when_cpu":1.0,"duration":1.0}]}]}"#,
    );
    assert!(matches!(load_workload(unordered.path()), Err(SimError::Json(_))));

    let garbage = write_temp("not json");
    assert!(matches!(load_workload(garbage.path()), Err(SimError::Json(_))));

    let missing = ScenarioRef::parse("/definitely/not/here.json").unwrap();
    assert!(matches!(missing.load(), Err(SimError::Io { .. })));
}
