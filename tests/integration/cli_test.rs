use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn taskdeck(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("taskdeck-cli").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn add(dir: &TempDir, title: &str, extra: &[&str]) {
    let mut args = vec!["add", title];
    args.extend_from_slice(extra);
    taskdeck(dir).args(&args).assert().success();
}

fn list_json(dir: &TempDir) -> Vec<Value> {
    let output = taskdeck(dir).args(["list", "--json"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

fn titles(dir: &TempDir) -> Vec<String> {
    list_json(dir)
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

fn find_export(dir: &TempDir) -> std::path::PathBuf {
    std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("tasks_export_")
        })
        .unwrap()
        .path()
}

#[test]
fn add_creates_the_task_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &[]);
    assert!(dir.path().join(".taskdeck/tasks.json").exists());
}

#[test]
fn add_rejects_empty_title() {
    let dir = TempDir::new().unwrap();
    taskdeck(&dir)
        .args(["add", "  "])
        .assert()
        .failure()
        .stderr(predicates::str::contains("title must not be empty"));
}

#[test]
fn list_empty_store() {
    let dir = TempDir::new().unwrap();
    taskdeck(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No tasks."));
}

#[test]
fn list_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    add(&dir, "First", &[]);
    add(&dir, "Second", &[]);
    add(&dir, "Third", &[]);
    assert_eq!(titles(&dir), ["First", "Second", "Third"]);
}

#[test]
fn list_filters_compose() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &["-c", "errands", "-p", "low"]);
    add(&dir, "Pay rent", &["-c", "finance", "-p", "high"]);
    add(&dir, "File taxes", &["-c", "Finance", "-p", "high"]);

    let output = taskdeck(&dir)
        .args(["list", "--json", "-c", "finance", "-p", "high"])
        .output()
        .unwrap();
    let tasks: Vec<Value> =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(tasks.len(), 2);
}

#[test]
fn search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &[]);
    add(&dir, "Pay rent", &[]);

    let output = taskdeck(&dir)
        .args(["list", "--json", "--search", "RENT"])
        .output()
        .unwrap();
    let tasks: Vec<Value> =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Pay rent");
}

#[test]
fn toggle_by_id_prefix() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &[]);
    let id = list_json(&dir)[0]["id"].as_str().unwrap().to_string();

    taskdeck(&dir)
        .args(["toggle", &id[..8]])
        .assert()
        .success()
        .stdout(predicates::str::contains("completed"));

    assert_eq!(list_json(&dir)[0]["completed"], true);
}

#[test]
fn toggle_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &[]);
    taskdeck(&dir)
        .args(["toggle", "zzzzzzzz"])
        .assert()
        .success()
        .stdout(predicates::str::contains("no task matches"));
}

#[test]
fn list_handles_multi_byte_imported_ids() {
    let dir = TempDir::new().unwrap();
    let import = dir.path().join("import.json");
    std::fs::write(
        &import,
        r#"[{
            "id": "aäääääää",
            "title": "Från import",
            "priority": "medium",
            "createdAt": "2026-08-01T10:00:00Z",
            "updatedAt": "2026-08-01T10:00:00Z"
        }]"#,
    )
    .unwrap();

    taskdeck(&dir)
        .args(["import", import.to_str().unwrap()])
        .assert()
        .success();

    taskdeck(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Från import"));

    taskdeck(&dir)
        .args(["toggle", "aää"])
        .assert()
        .success()
        .stdout(predicates::str::contains("completed"));
}

#[test]
fn update_changes_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &[]);
    let id = list_json(&dir)[0]["id"].as_str().unwrap().to_string();

    taskdeck(&dir)
        .args(["update", &id, "--title", "Buy oat milk", "-p", "high"])
        .assert()
        .success();

    let task = &list_json(&dir)[0];
    assert_eq!(task["title"], "Buy oat milk");
    assert_eq!(task["priority"], "high");
}

#[test]
fn delete_removes_the_task() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &[]);
    add(&dir, "Pay rent", &[]);
    let id = list_json(&dir)[0]["id"].as_str().unwrap().to_string();

    taskdeck(&dir).args(["delete", &id]).assert().success();
    assert_eq!(titles(&dir), ["Pay rent"]);
}

#[test]
fn move_reorders_tasks() {
    let dir = TempDir::new().unwrap();
    add(&dir, "A", &[]);
    add(&dir, "B", &[]);
    add(&dir, "C", &[]);

    taskdeck(&dir).args(["move", "0", "2"]).assert().success();
    assert_eq!(titles(&dir), ["B", "C", "A"]);
}

#[test]
fn move_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, "A", &[]);
    taskdeck(&dir)
        .args(["move", "0", "5"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("out of range"));
}

#[test]
fn undo_and_redo_across_invocations() {
    let dir = TempDir::new().unwrap();
    add(&dir, "A", &[]);
    add(&dir, "B", &[]);

    taskdeck(&dir).arg("undo").assert().success();
    assert_eq!(titles(&dir), ["A"]);

    taskdeck(&dir).arg("redo").assert().success();
    assert_eq!(titles(&dir), ["A", "B"]);
}

#[test]
fn undo_on_fresh_store_reports_nothing() {
    let dir = TempDir::new().unwrap();
    taskdeck(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(predicates::str::contains("nothing to undo"));
}

#[test]
fn stats_reports_counts() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Buy milk", &["-p", "low"]);
    add(&dir, "Pay rent", &["-p", "high", "--due", "2020-01-01"]);

    let output = taskdeck(&dir).args(["stats", "--json"]).output().unwrap();
    let stats: Value = serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();

    assert_eq!(stats["total"], 2);
    assert_eq!(stats["active"], 2);
    assert_eq!(stats["completed"], 0);
    assert_eq!(stats["overdue"], 1);
    assert_eq!(stats["by_priority"]["high"], 1);
    assert_eq!(stats["by_priority"]["medium"], 0);
    assert_eq!(stats["by_priority"]["low"], 1);
}

#[test]
fn export_then_import_replaces() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Keep me", &[]);
    taskdeck(&dir).arg("export").assert().success();
    let export = find_export(&dir);

    taskdeck(&dir).arg("clear").assert().success();
    assert!(titles(&dir).is_empty());

    taskdeck(&dir)
        .args(["import", export.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(titles(&dir), ["Keep me"]);
}

#[test]
fn import_merge_appends_with_fresh_ids() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Mine", &[]);
    taskdeck(&dir).arg("export").assert().success();
    let export = find_export(&dir);

    taskdeck(&dir)
        .args(["import", "--merge", export.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(titles(&dir), ["Mine", "Mine"]);
    let tasks = list_json(&dir);
    assert_ne!(tasks[0]["id"], tasks[1]["id"]);
}

#[test]
fn import_invalid_json_fails_and_preserves_state() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Untouched", &[]);

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();

    taskdeck(&dir)
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid JSON file"));

    assert_eq!(titles(&dir), ["Untouched"]);
}

#[test]
fn clear_empties_the_store_and_is_undoable() {
    let dir = TempDir::new().unwrap();
    add(&dir, "A", &[]);
    add(&dir, "B", &[]);

    taskdeck(&dir).arg("clear").assert().success();
    assert!(titles(&dir).is_empty());

    taskdeck(&dir).arg("undo").assert().success();
    assert_eq!(titles(&dir), ["A", "B"]);
}
