use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn pivotgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pivotgen").unwrap();
    cmd.current_dir(dir)
        .env_remove("PIVOTGEN_CONFIG")
        .env_remove("PIVOTGEN_PIVOT_STUB")
        .env_remove("RUST_LOG");
    cmd
}

fn migrations(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.join("database/migrations"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn creates_migration_with_bundled_stub() {
    let temp_dir = TempDir::new().unwrap();

    pivotgen(temp_dir.path())
        .args(["generate:migration:pivot", "Users", "Roles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pivot created successfully."))
        .stdout(predicate::str::contains("_create_role_user_pivot_table.php"));

    let names = migrations(temp_dir.path());
    assert_eq!(names.len(), 1);
    assert!(names[0].ends_with("_create_role_user_pivot_table.php"));

    let content = fs::read_to_string(temp_dir.path().join("database/migrations").join(&names[0]))
        .unwrap();
    assert!(content.contains("class CreateRoleUserPivotTable extends Migration"));
    assert!(!content.contains("{{"));
}

#[test]
fn uses_configured_stub() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("pivot.stub"),
        "{{class}} {{pivotTableName}} {{columnOne}} {{columnTwo}} {{tableOne}} {{tableTwo}} {{keep}}",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("generators.toml"),
        "[generators]\npivot_stub = \"pivot.stub\"\n",
    )
    .unwrap();

    pivotgen(temp_dir.path())
        .args(["generate:migration:pivot", "statuses", "items"])
        .assert()
        .success();

    let names = migrations(temp_dir.path());
    let content = fs::read_to_string(temp_dir.path().join("database/migrations").join(&names[0]))
        .unwrap();
    assert_eq!(
        content,
        "CreateItemStatusPivotTable item_status item status items statuses {{keep}}"
    );
}

#[test]
fn missing_stub_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();

    pivotgen(temp_dir.path())
        .args(["generate:migration:pivot", "users", "roles", "--stub", "missing.stub"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Stub not found"));
}

#[test]
fn missing_argument_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    pivotgen(temp_dir.path())
        .args(["generate:migration:pivot", "users"])
        .assert()
        .code(2);

    assert!(!temp_dir.path().join("database").exists());
}

#[test]
fn json_report() {
    let temp_dir = TempDir::new().unwrap();

    pivotgen(temp_dir.path())
        .args(["--json", "generate:migration:pivot", "posts", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""))
        .stdout(predicate::str::contains("\"pivot_table_name\": \"post_tag\""));
}

#[test]
fn dry_run_prints_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    pivotgen(temp_dir.path())
        .args(["generate:migration:pivot", "users", "roles", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run:"))
        .stdout(predicate::str::contains("Schema::create('role_user'"));

    assert!(!temp_dir.path().join("database").exists());
}
