use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn biok_cmd(db_arg: &str) -> Command {
    let mut cmd = Command::cargo_bin("biok").expect("Failed to find biok binary");
    cmd.args(["--no-color", "--database-file", db_arg]);
    cmd
}

fn add_plan(db_arg: &str, title: &str, extra: &[&str]) -> String {
    let output = biok_cmd(db_arg)
        .args([
            "plan",
            "add",
            title,
            "--author",
            "sergio",
            "--las-carreras",
            "10",
            "--portu",
            "20",
            "--location",
            "city",
            "--duration",
            "short",
        ])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"))
}

fn add_comer(db_arg: &str, title: &str, extra: &[&str]) -> String {
    let output = biok_cmd(db_arg)
        .args([
            "comer",
            "add",
            title,
            "--author",
            "nerea",
            "--las-carreras",
            "5",
            "--portu",
            "15",
            "--price-range",
            "mid",
        ])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"))
}

#[test]
fn test_cli_add_plan_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    biok_cmd(db_path.to_str().unwrap())
        .args([
            "plan",
            "add",
            "Cine",
            "--author",
            "sergio",
            "--las-carreras",
            "10",
            "--portu",
            "20",
            "--location",
            "city",
            "--duration",
            "short",
            "--price",
            "8.5",
            "--notes",
            "Versión original",
            "--link",
            "Cartelera=https://example.com/cine",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan item with ID:"))
        .stdout(predicate::str::contains("# Cine"))
        .stdout(predicate::str::contains("- Price: 8.50 € per person"))
        .stdout(predicate::str::contains("Versión original"))
        .stdout(predicate::str::contains(
            "- [Cartelera](https://example.com/cine)",
        ));
}

#[test]
fn test_cli_add_without_author_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    biok_cmd(db_path.to_str().unwrap())
        .args([
            "comer",
            "add",
            "Bar Txoko",
            "--las-carreras",
            "5",
            "--portu",
            "5",
            "--price-range",
            "low",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author"));
}

#[test]
fn test_cli_default_author_preference() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    biok_cmd(db_arg)
        .args(["prefs", "set", "--author", "nerea", "--origin", "portu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Preferences saved"))
        .stdout(predicate::str::contains("- Default author: Nerea"))
        .stdout(predicate::str::contains("- Default origin: Portu"));

    biok_cmd(db_arg)
        .args([
            "comer",
            "add",
            "Bar Txoko",
            "--las-carreras",
            "5",
            "--portu",
            "5",
            "--price-range",
            "low",
            "--meal",
            "lunch,bar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Proposed by: Nerea"))
        .stdout(predicate::str::contains("- Meals: lunch, bar"));

    biok_cmd(db_arg)
        .args(["prefs", "clear"])
        .assert()
        .success();
    biok_cmd(db_arg)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Default author: not set"));
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    biok_cmd(db_path.to_str().unwrap())
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plans (0)"))
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_default_command_lists_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_plan(db_arg, "Cine", &[]);

    biok_cmd(db_arg)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Pending (1)"))
        .stdout(predicate::str::contains("**Cine**"));
}

#[test]
fn test_cli_list_search() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_plan(db_arg, "Cine", &[]);
    add_plan(db_arg, "Teatro", &["--notes", "Entradas en taquilla"]);

    biok_cmd(db_arg)
        .args(["plan", "list", "--search", "TAQUILLA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teatro"))
        .stdout(predicate::str::contains("Cine").not());
}

#[test]
fn test_cli_show_by_prefix() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_plan(db_arg, "Museo", &[]);

    biok_cmd(db_arg)
        .args(["plan", "show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Museo"))
        .stdout(predicate::str::contains(format!("- ID: {id}")));
}

#[test]
fn test_cli_show_wrong_category_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_comer(db_arg, "Sidrería", &[]);

    biok_cmd(db_arg)
        .args(["plan", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a comer item, not plan"));
}

#[test]
fn test_cli_invalid_item_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    biok_cmd(db_path.to_str().unwrap())
        .args(["plan", "show", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_edit_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_plan(db_arg, "Cine", &[]);

    biok_cmd(db_arg)
        .args([
            "plan", "edit", &id, "--title", "Teatro", "--price", "20", "--car", "true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan item with ID:"))
        .stdout(predicate::str::contains("- Updated title"))
        .stdout(predicate::str::contains("# Teatro"))
        .stdout(predicate::str::contains("- Car needed: yes"));

    biok_cmd(db_arg)
        .args(["plan", "edit", &id, "--title", "   "])
        .assert()
        .failure();
}

#[test]
fn test_cli_comer_edit_rejects_plan_fields() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_comer(db_arg, "Sidrería", &[]);

    // --price only exists on plan edit
    biok_cmd(db_arg)
        .args(["comer", "edit", &id, "--price", "20"])
        .assert()
        .failure();

    biok_cmd(db_arg)
        .args(["comer", "edit", &id, "--meal", "dinner", "--price-range", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Meals: dinner"))
        .stdout(predicate::str::contains("- Price range: €€€"));
}

#[test]
fn test_cli_fav_and_done_toggles() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_plan(db_arg, "Ruta", &[]);

    biok_cmd(db_arg)
        .args(["plan", "fav", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as favorite"))
        .stdout(predicate::str::contains("# Ruta ★"));

    biok_cmd(db_arg)
        .args(["plan", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as done"))
        .stdout(predicate::str::contains("- Status: done on"));

    biok_cmd(db_arg)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## History (1)"));

    biok_cmd(db_arg)
        .args(["plan", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as pending"))
        .stdout(predicate::str::contains("- Status: pending"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_plan(db_arg, "Cine", &[]);

    biok_cmd(db_arg)
        .args(["plan", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    biok_cmd(db_arg)
        .args(["plan", "show", &id])
        .assert()
        .success();

    biok_cmd(db_arg)
        .args(["plan", "delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan item 'Cine'"));

    biok_cmd(db_arg)
        .args(["plan", "show", &id])
        .assert()
        .failure();
}

#[test]
fn test_cli_decide_no_candidates() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    biok_cmd(db_path.to_str().unwrap())
        .args(["decide", "plan", "--no-reveal", "--accept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note: Nothing in plan matches"));
}

#[test]
fn test_cli_decide_count() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_plan(db_arg, "Cine", &[]);
    add_plan(db_arg, "Sierra", &["--car"]);

    biok_cmd(db_arg)
        .args(["decide", "plan", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 candidates in plan"));

    biok_cmd(db_arg)
        .args(["decide", "plan", "--count", "--no-car"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 candidate in plan"))
        .stdout(predicate::str::contains("no car"));
}

#[test]
fn test_cli_decide_accept() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_plan(db_arg, "Cine", &[]);

    biok_cmd(db_arg)
        .args(["decide", "plan", "--no-reveal", "--accept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposal: Cine"))
        .stdout(predicate::str::contains("Success: 'Cine' is now in progress"));

    biok_cmd(db_arg)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## In progress (1)"));
}

#[test]
fn test_cli_decide_quit_persists_nothing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_comer(db_arg, "Sidrería", &["--meal", "dinner"]);

    biok_cmd(db_arg)
        .args(["decide", "comer", "--no-reveal", "--meal", "dinner"])
        .write_stdin("r\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposal: Sidrería").count(2))
        .stdout(predicate::str::contains("now in progress").not());

    biok_cmd(db_arg)
        .args(["comer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Pending (1)"));
}

#[test]
fn test_cli_decide_reroll_then_accept() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_comer(db_arg, "Sidrería", &[]);

    biok_cmd(db_arg)
        .args(["decide", "comer", "--reveal-frames", "3", "--reveal-tick-ms", "1"])
        .write_stdin("maybe\nr\na\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 'Sidrería' is now in progress"));
}

#[test]
fn test_cli_decide_filters_meals() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_comer(db_arg, "Menú", &["--meal", "lunch"]);

    biok_cmd(db_arg)
        .args(["decide", "comer", "--no-reveal", "--accept", "--meal", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing in comer matches"));
}

#[test]
fn test_cli_stats() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let id = add_plan(db_arg, "Cine", &[]);
    biok_cmd(db_arg).args(["plan", "done", &id]).assert().success();

    biok_cmd(db_arg)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Statistics"))
        .stdout(predicate::str::contains("- Items: 1"))
        .stdout(predicate::str::contains("- Done plans: 0% home, 100% out"))
        .stdout(predicate::str::contains("## Achievements (3/35)"));
}

#[test]
fn test_cli_export_import_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    add_plan(db_arg, "Cine", &[]);
    add_comer(db_arg, "Sidrería", &[]);

    let output = biok_cmd(db_arg)
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let document: serde_json::Value =
        serde_json::from_slice(&output).expect("export should print JSON");
    assert_eq!(document["planes"].as_array().unwrap().len(), 1);
    assert_eq!(document["comer"].as_array().unwrap().len(), 1);

    let backup = temp_dir.path().join("backup.json");
    biok_cmd(db_arg)
        .args(["export", "--output", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 items to"));

    let restored = temp_dir.path().join("restored.db");
    let restored_arg = restored.to_str().unwrap();
    biok_cmd(restored_arg)
        .args(["import", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 2 items (1 planes, 1 comer)",
        ));

    biok_cmd(restored_arg)
        .args(["comer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidrería"));
}

#[test]
fn test_cli_import_rejects_malformed_backup() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let backup = temp_dir.path().join("broken.json");
    fs::write(&backup, r#"{"planes": []}"#).unwrap();

    biok_cmd(db_arg)
        .args(["import", backup.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backup format"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("biok").expect("Failed to find biok binary");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decide"))
        .stdout(predicate::str::contains("--database-file"));
}

#[test]
fn test_cli_version_output() {
    let mut cmd = Command::cargo_bin("biok").expect("Failed to find biok binary");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("biok"));
}

/// Helper function to extract the full item ID from a create result
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.split_once("item with ID: "))
        .map(|(_, id)| id.trim().to_string())
        .unwrap_or_else(|| panic!("Could not extract ID from output: {output}"))
}
