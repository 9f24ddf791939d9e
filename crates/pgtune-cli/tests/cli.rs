//! CLI command integration tests.
//! Each test points HOME at a temp directory so no real settings file leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pgtune_cmd(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pgtune").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("PGTUNE_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn derive_table_english() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "8", "--memory", "32", "--storage", "ssd", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Performance Parameters =="))
        .stdout(predicate::str::contains("== Autovacuum Configuration =="))
        .stdout(predicate::str::is_match(r"max_connections\s+1600\s+Yes").unwrap())
        .stdout(predicate::str::is_match(r"shared_buffers\s+8GB\s+Yes").unwrap())
        .stdout(predicate::str::is_match(r"random_page_cost\s+1\.1\s+No").unwrap());
}

#[test]
fn derive_table_defaults_to_chinese() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "4", "--memory", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL 性能参数优化工具"))
        .stdout(predicate::str::contains("== 性能相关参数 =="));
}

#[test]
fn derive_json() {
    let home = TempDir::new().unwrap();
    let output = pgtune_cmd(&home)
        .args(["derive", "--cpu", "4", "--memory", "8", "--storage", "hdd", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    let value = |name: &str| {
        rows.iter()
            .find(|r| r["name"] == name)
            .map(|r| r["value"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(value("max_connections"), "800");
    assert_eq!(value("shared_buffers"), "2GB");
    assert_eq!(value("random_page_cost"), "4");
    assert_eq!(value("max_parallel_workers"), "8");
    assert_eq!(json["input"]["dbVersion"], "13");
}

#[test]
fn sql_script() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["sql", "--cpu", "8", "--memory", "32", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-- The following parameters require"))
        .stdout(predicate::str::contains("ALTER SYSTEM SET shared_buffers = '8GB';"))
        .stdout(predicate::str::ends_with("SELECT pg_reload_conf();\n"));
}

#[test]
fn conf_fragment() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "2", "--memory", "4", "--format", "conf", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Performance Parameters\n"))
        .stdout(predicate::str::contains("max_connections = '400'"));
}

#[test]
fn invalid_memory_is_rejected() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "4", "--memory=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input for memoryGB"));
}

#[test]
fn zero_cores_is_rejected() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "0", "--memory", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cpuCores"));
}

#[test]
fn unknown_storage_is_rejected() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "4", "--memory", "8", "--storage", "tape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tape"));
}

#[test]
fn explain_parameter() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["explain", "wal_buffers", "--db-version", "16", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance Parameters"))
        .stdout(predicate::str::contains(
            "https://www.postgresql.org/docs/16/runtime-config-wal.html#guc-wal-buffers",
        ));
}

#[test]
fn categories_listed() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["categories", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("performance"))
        .stdout(predicate::str::contains("Timeout Settings (5)"))
        .stdout(predicate::str::contains("Other Parameters"));
}

#[test]
fn rust_log_enables_debug_events() {
    for filter in ["pgtune_catalog=debug", "debug"] {
        let home = TempDir::new().unwrap();
        pgtune_cmd(&home)
            .env("RUST_LOG", filter)
            .args(["derive", "--cpu", "4", "--memory", "8", "--format", "json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("derived parameters"));
    }
}

#[test]
fn default_log_level_is_quiet() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["derive", "--cpu", "4", "--memory", "8", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("derived parameters").not());
}

#[test]
fn category_members_listed() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["categories", "timeout", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Timeout Settings\n"))
        .stdout(predicate::str::is_match(r"statement_timeout\s+No").unwrap())
        .stdout(predicate::str::contains("tcp_keepalives_idle"));
}

#[test]
fn unknown_category_is_rejected() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["categories", "misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("misc"));
}

#[test]
fn settings_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("pgtune.toml");
    std::fs::write(
        &settings,
        "lang = \"en\"\nstorage = \"hdd\"\nformat = \"sql\"\ndb_version = \"15\"\n",
    )
    .unwrap();

    pgtune_cmd(&home)
        .arg("--config")
        .arg(&settings)
        .args(["derive", "--cpu", "4", "--memory", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALTER SYSTEM SET random_page_cost = '4';"));
}

#[test]
fn settings_from_home_directory() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("pgtune");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "lang = \"en\"\n").unwrap();

    pgtune_cmd(&home)
        .args(["derive", "--cpu", "4", "--memory", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL Performance Parameter Optimizer"));
}

#[test]
fn flags_override_settings_file() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("pgtune.toml");
    std::fs::write(&settings, "storage = \"hdd\"\nformat = \"sql\"\n").unwrap();

    pgtune_cmd(&home)
        .env("PGTUNE_CONFIG", &settings)
        .args(["derive", "--cpu", "4", "--memory", "8", "--storage", "ssd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALTER SYSTEM SET random_page_cost = '1.1';"));
}

#[test]
fn missing_explicit_settings_file_fails() {
    let home = TempDir::new().unwrap();
    pgtune_cmd(&home)
        .args(["--config", "/nonexistent/pgtune.toml", "categories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}
