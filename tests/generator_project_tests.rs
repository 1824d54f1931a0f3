#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::temp_files::{copy_fixture, file_names, write_file};
use std::fs;
use voldelig::generator::{
    generate_from_config, CategoricalField, CategoricalRegistry, GenerateOptions,
};

#[test]
fn test_generate_from_config_writes_one_file_per_container() {
    let dir = tempfile::tempdir().unwrap();
    let config = copy_fixture(dir.path(), "appsettings.json");
    let out = dir.path().join("Generated");

    let report = generate_from_config(&config, &GenerateOptions::new(&out)).expect("generate");

    assert_eq!(
        file_names(&out),
        vec!["Employee.rs", "Jobheader.rs", "TimesheetLine.rs", "mod.rs"]
    );
    assert_eq!(report.written.len(), 4);
    assert!(report.skipped_existing.is_empty());
    assert_eq!(report.skipped_containers, vec!["approvals", "customers"]);

    let employee = fs::read_to_string(out.join("Employee.rs")).unwrap();
    assert!(employee.contains("pub struct Employee {"));
    assert!(employee.contains("pub Employeenumber: String,"));
    assert!(employee.contains("pub Gender: GenderType,"));
    assert!(employee.contains("pub Country: CountryType,"));
    let country = employee.find("pub enum CountryType").unwrap();
    let gender = employee.find("pub enum GenderType").unwrap();
    assert!(country < gender);

    let job = fs::read_to_string(out.join("Jobheader.rs")).unwrap();
    assert_eq!(job.matches("pub Jobnumber: String,").count(), 1);
    assert!(!job.contains("pub enum"));

    let timesheet = fs::read_to_string(out.join("TimesheetLine.rs")).unwrap();
    assert!(timesheet.contains("pub EntryDate: String,"));
    assert!(timesheet.contains("pub enum GenderType"));
    assert!(!timesheet.contains("CountryType"));

    let mod_rs = fs::read_to_string(out.join("mod.rs")).unwrap();
    assert!(mod_rs.contains("pub mod Employee;"));
    assert!(mod_rs.contains("pub mod Jobheader;"));
    assert!(mod_rs.contains("pub mod TimesheetLine;"));
}

#[test]
fn test_generate_from_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = copy_fixture(dir.path(), "appsettings.yaml");
    let out = dir.path().join("out");

    let report = generate_from_config(&config, &GenerateOptions::new(&out)).unwrap();

    assert_eq!(file_names(&out), vec!["Employee.rs", "mod.rs"]);
    assert_eq!(report.skipped_containers, vec!["vendor"]);
    let employee = fs::read_to_string(out.join("Employee.rs")).unwrap();
    assert!(employee.contains("pub Country: CountryType,"));
    assert!(!employee.contains("GenderType"));
}

#[test]
fn test_generate_keeps_existing_files_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let config = copy_fixture(dir.path(), "appsettings.json");
    let out = dir.path().join("Generated");
    fs::create_dir_all(&out).unwrap();
    write_file(&out, "Employee.rs", "// hand edited\n");

    let report = generate_from_config(&config, &GenerateOptions::new(&out)).unwrap();
    assert_eq!(report.skipped_existing, vec![out.join("Employee.rs")]);
    assert_eq!(
        fs::read_to_string(out.join("Employee.rs")).unwrap(),
        "// hand edited\n"
    );

    let mut options = GenerateOptions::new(&out);
    options.force = true;
    let report = generate_from_config(&config, &options).unwrap();
    assert!(report.skipped_existing.is_empty());
    assert!(fs::read_to_string(out.join("Employee.rs"))
        .unwrap()
        .contains("pub struct Employee"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = copy_fixture(dir.path(), "appsettings.json");
    let out = dir.path().join("Generated");

    let mut options = GenerateOptions::new(&out);
    options.dry_run = true;
    let report = generate_from_config(&config, &options).unwrap();

    assert!(!out.exists());
    assert!(report.written.is_empty());
    assert_eq!(report.units.len(), 3);
    assert_eq!(report.units[0].file_base_name, "Employee");
}

#[test]
fn test_generate_with_extra_categorical_field() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "appsettings.json",
        r#"{"Maconomy":{"containers":{"task":{"card":{"keyfield":"id","fields":["status","title"]}}}}}"#,
    );
    let out = dir.path().join("gen");
    let mut options = GenerateOptions::new(&out);
    options.registry = CategoricalRegistry::builtin().with_extra([CategoricalField::new(
        "status",
        "StatusType",
        &["STATUS_NOT_HERE", "OPEN", "CLOSED"],
    )]);

    generate_from_config(&config, &options).unwrap();
    let task = fs::read_to_string(out.join("Task.rs")).unwrap();
    assert!(task.contains("pub Status: StatusType,"));
    assert!(task.contains("pub enum StatusType {"));
    assert!(task.contains("StatusNotHere,"));
    assert!(task.contains("pub Title: String,"));
}

#[test]
fn test_generate_empty_container_set() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "appsettings.json",
        r#"{"Maconomy":{"containers":{}}}"#,
    );
    let out = dir.path().join("gen");
    let report = generate_from_config(&config, &GenerateOptions::new(&out)).unwrap();
    assert!(report.units.is_empty());
    assert!(report.written.is_empty());
    assert!(file_names(&out).is_empty());
}

#[test]
fn test_generate_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate_from_config(
        &dir.path().join("appsettings.json"),
        &GenerateOptions::new(dir.path().join("gen")),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("not found"));
    assert!(!dir.path().join("gen").exists());
}

#[test]
fn test_generate_rejects_containers_sharing_a_type_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "appsettings.json",
        r#"{"Maconomy":{"containers":{
            "job_cost":{"card":{"keyfield":"a","fields":["x"]}},
            "job-cost":{"card":{"keyfield":"b","fields":["y"]}}
        }}}"#,
    );
    let out = dir.path().join("gen");

    let err = generate_from_config(&config, &GenerateOptions::new(&out)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("'job-cost'"), "{message}");
    assert!(message.contains("'job_cost'"), "{message}");
    assert!(message.contains("`JobCost`"), "{message}");
    assert!(!out.exists());
}

#[test]
fn test_generate_rejects_invalid_registry_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = copy_fixture(dir.path(), "appsettings.json");
    let out = dir.path().join("gen");
    let mut options = GenerateOptions::new(&out);
    options.registry = CategoricalRegistry::builtin().with_extra([CategoricalField::new(
        "rank",
        "RankType",
        &["RANK_NOT_HERE", "1st"],
    )]);

    let err = generate_from_config(&config, &options).unwrap_err();
    assert!(format!("{err:#}").contains("starts with a digit"));
    assert!(!out.exists());
}
