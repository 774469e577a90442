mod common;

use assert_cmd::Command;
use common::FakeBackend;
use predicates::prelude::*;
use std::path::Path;

const TODAY: &str = "2024-06-15";

fn rollcall(home: &Path, backend: &FakeBackend) -> Command {
    let mut cmd = Command::cargo_bin("rollcall").unwrap();
    cmd.env("ROLLCALL_HOME", home)
        .env("ROLLCALL_API_URL", &backend.base_url)
        .env_remove("RUST_LOG")
        .arg("--today")
        .arg(TODAY);
    cmd
}

#[test]
fn test_list_is_the_default_command() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    let output = rollcall(home.path(), &backend).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["ana", "Bruno", "Carla", "Davi"]);
}

#[test]
fn test_list_filters_and_placeholders() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["list", "--class", "10", "--status", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bruno Lima"))
        .stdout(predicate::str::contains("ana souza"))
        .stdout(predicate::str::contains("Carla Dias").not());

    rollcall(home.path(), &backend)
        .args(["ls", "--search", "ROCHA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Davi Rocha"))
        .stdout(predicate::str::contains(" - "));
}

#[test]
fn test_sort_preference_survives_runs() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["sort", "age", "--order", "desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorting by age desc"));

    let prefs = std::fs::read_to_string(home.path().join("prefs.json")).unwrap();
    assert!(prefs.contains("age"));

    rollcall(home.path(), &backend)
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by age desc"));

    // Oldest first, ties keep backend order, the unparseable birth date goes last.
    let output = rollcall(home.path(), &backend).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3", "2", "4"]);
}

#[test]
fn test_sort_toggle_flips_order() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorting by name desc"));
    rollcall(home.path(), &backend)
        .args(["sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorting by name asc"));
}

#[test]
fn test_stats_counts_full_roster() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 4  Active: 3"))
        .stdout(predicate::str::contains("2/2"));
}

#[test]
fn test_export_csv_to_file() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();
    let target = home.path().join("out.csv");

    rollcall(home.path(), &backend)
        .args(["export", "csv", "--status", "inactive", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 students"));

    let csv = std::fs::read_to_string(&target).unwrap();
    assert_eq!(
        csv,
        "id,name,birth_date,age,email,status,class_id,class\n\
         3,Carla Dias,2014-12-01,9,carla@school.test,inactive,11,Year 1 B\n"
    );
}

#[test]
fn test_export_json_to_stdout() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["export", "json", "--output", "-", "--search", "bruno"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nome\": \"Bruno Lima\""))
        .stdout(predicate::str::contains("\"status\": \"ativo\""));
}

#[test]
fn test_enroll_posts_to_backend() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["enroll", "4", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Davi Rocha enrolled in Year 1 B"));

    assert!(backend
        .requests()
        .iter()
        .any(|r| r == r#"POST /api/matriculas {"aluno_id":"4","turma_id":"11"}"#));
}

#[test]
fn test_enroll_into_full_class_fails() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["enroll", "3", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Year 1 A"));

    assert!(backend.requests().iter().all(|r| !r.starts_with("POST")));
}

#[test]
fn test_add_validates_before_sending() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["add", "Al", "--born", "2016-01-01", "--email", "al@school.test", "--class", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name must be between 3 and 80 characters."));
    assert!(backend.requests().is_empty());

    rollcall(home.path(), &backend)
        .args(["add", "Elisa", "Melo", "--born", "2016-01-01", "--email", "elisa@school.test", "--class", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student created: Elisa Melo"));
    assert!(backend
        .requests()
        .iter()
        .any(|r| r.starts_with("POST /api/alunos") && r.contains("\"nome\":\"Elisa Melo\"")));
}

#[test]
fn test_remove_with_yes_skips_prompt() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["rm", "2", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted: ana souza"));
    assert!(backend.requests().iter().any(|r| r == "DELETE /api/alunos/2"));
}

#[test]
fn test_remove_declined_sends_nothing() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["remove", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
    assert!(backend.requests().iter().all(|r| !r.starts_with("DELETE")));
}

#[test]
fn test_edit_sends_merged_record() {
    let home = tempfile::tempdir().unwrap();
    let backend = FakeBackend::start();

    rollcall(home.path(), &backend)
        .args(["edit", "1", "--status", "inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated: Bruno Lima"));

    let put = backend
        .requests()
        .into_iter()
        .find(|r| r.starts_with("PUT /api/alunos/1"))
        .unwrap();
    assert!(put.contains("\"status\":\"inativo\""));
    assert!(put.contains("\"email\":\"bruno@school.test\""));
}

#[test]
fn test_backend_down_is_reported() {
    let home = tempfile::tempdir().unwrap();

    Command::cargo_bin("rollcall")
        .unwrap()
        .env("ROLLCALL_HOME", home.path())
        .args(["--api-url", "http://127.0.0.1:9/api", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
