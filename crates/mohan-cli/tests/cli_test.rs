mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_sections_lists_role_pages() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--role", "employee", "sections"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee sections:"))
        .stdout(predicate::str::contains("my-focus"))
        .stdout(predicate::str::contains("system-status").not());
}

#[test]
fn test_snapshot_defaults_to_home_section() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("snapshot")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1 System Status]"))
        .stdout(predicate::str::contains("Staging Blocked"))
        .stdout(predicate::str::contains("14.2 Days"));
}

#[test]
fn test_snapshot_json_selects_drift() {
    let fixture = TestFixture::new();

    let json = fixture.json(&[
        "snapshot",
        "--section",
        "strategy-trace",
        "--drift",
        "eng_drift",
        "--open",
        "drawer",
    ]);

    let content = &json["content"];
    assert_eq!(content["header"]["user_name"], "Alex Chen");
    assert_eq!(content["header"]["title"], "Strategy Trace");
    assert!(content["drawer"].is_object());
    assert!(content["profile_menu"].is_null());
}

#[test]
fn test_snapshot_rejects_unknown_section() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["snapshot", "--section", "payroll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("payroll"));
}

#[test]
fn test_ask_manager_gets_drift_alert() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["ask", "--no-delay", "Why is alignment dropping?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You: Why is alignment dropping?"))
        .stdout(predicate::str::contains("Mohan AI: Strategic alignment dropped 8%"))
        .stdout(predicate::str::contains("Recommendation:"));
}

#[test]
fn test_ask_employee_report_scenario() {
    let fixture = TestFixture::new();

    let json = fixture.json(&[
        "--role",
        "employee",
        "ask",
        "--no-delay",
        "--scenario",
        "report",
        "draft my standup",
    ]);

    let content = &json["content"];
    assert_eq!(content["scenario"], "report");
    assert_eq!(content["question"]["sender"], "user");
    assert_eq!(content["reply"]["sender"], "assistant");
    assert!(
        content["reply"]["content"]
            .as_str()
            .unwrap()
            .starts_with("Here is your standup draft")
    );
}

#[test]
fn test_ask_rejects_blank_question() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["ask", "--no-delay", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question is empty"));
}

#[test]
fn test_config_init_show_and_path() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file yet"));

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written"));
    assert!(fixture.config_path().exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overwritten"));

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reply_delay_ms = 1500"))
        .stdout(predicate::str::contains("No config file yet").not());

    fixture
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_default_role_applies() {
    let fixture = TestFixture::new();
    let dir = fixture.config_path().parent().unwrap();
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(
        fixture.config_path(),
        "[dashboard]\ndefault_role = \"employee\"\n",
    )
    .unwrap();

    fixture
        .command()
        .arg("snapshot")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1 My Focus]"));
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = TestFixture::new();
    let dir = fixture.config_path().parent().unwrap();
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(fixture.config_path(), "[animation]\nmin_steps = 0\n").unwrap();

    fixture
        .command()
        .arg("sections")
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_steps"));
}

#[test]
fn test_config_init_force_repairs_invalid_file() {
    let fixture = TestFixture::new();
    let dir = fixture.config_path().parent().unwrap();
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(
        fixture.config_path(),
        "[animation]\nmin_steps = 30\nmax_steps = 10\n",
    )
    .unwrap();

    fixture
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overwritten"));

    fixture.command().arg("sections").assert().success();
}

#[test]
fn test_snapshot_refuses_section_of_other_role() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--role", "employee", "snapshot", "--section", "strategy-trace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available for the employee role"))
        .stdout(predicate::str::contains("My Focus").not());
}

#[test]
fn test_catalog_check_builtin_is_clean() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["catalog", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is consistent"))
        .stdout(predicate::str::contains("builtin"));
}

#[test]
fn test_catalog_check_reports_duplicates() {
    let fixture = TestFixture::new();

    let dump = fixture
        .command()
        .args(["catalog", "dump"])
        .output()
        .unwrap();
    assert!(dump.status.success());
    let mut catalog: serde_json::Value = serde_json::from_slice(&dump.stdout).unwrap();

    let first = catalog["drifts"][0].clone();
    catalog["drifts"].as_array_mut().unwrap().push(first);
    let path = fixture.path("broken.json");
    std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

    fixture
        .command()
        .args(["catalog", "check", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate drift key 'eng_drift'"))
        .stderr(predicate::str::contains("1 issue(s)"));
}

#[test]
fn test_custom_catalog_drives_snapshot() {
    let fixture = TestFixture::new();

    let dump = fixture
        .command()
        .args(["catalog", "dump"])
        .output()
        .unwrap();
    let mut catalog: serde_json::Value = serde_json::from_slice(&dump.stdout).unwrap();
    catalog["profile"]["name"] = serde_json::Value::from("Priya Raman");
    let path = fixture.path("catalog.json");
    std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

    let json = fixture.json(&["--catalog", path.to_str().unwrap(), "snapshot"]);
    assert_eq!(json["content"]["header"]["user_name"], "Priya Raman");
}
