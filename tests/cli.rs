use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn vertexpoint_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vertexpoint"));
    cmd.env("VERTEXPOINT_CONFIG", config);
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("VERTEXPOINT_WEBHOOK_URL");
    cmd
}

fn run(config: &Path, args: &[&str]) -> Output {
    vertexpoint_cmd(config).args(args).output().expect("run vertexpoint")
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

#[test]
fn classify_prints_the_band() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.toml");

    for (duration, expected) in [("2.5s", "success"), ("4.0s", "warning"), ("abcs", "critical")] {
        let out = run(&config, &["classify", duration]);
        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains(expected));
    }
}

#[test]
fn analyze_json_is_reproducible_with_a_seed() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "[generator]\nmin_delay_ms = 5\nmax_delay_ms = 5\n");

    let first = run(&config, &["analyze", "https://example.com", "--json", "--seed", "9"]);
    let second = run(&config, &["analyze", "https://example.com", "--json", "--seed", "9"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let report: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(report["url"], "https://example.com");
    assert_eq!(report["roadmap_30_days"].as_array().unwrap().len(), 3);
}

#[test]
fn analyze_with_email_but_no_webhook_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "[generator]\nmin_delay_ms = 5\nmax_delay_ms = 5\n");

    let out = run(&config, &["analyze", "https://example.com", "--json", "--email", "you@company.com"]);
    assert!(!out.status.success());
}

#[test]
fn init_then_validate_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fresh").join("config.toml");

    assert!(run(&config, &["init"]).status.success());
    assert!(config.exists());
    assert!(run(&config, &["validate"]).status.success());
    assert!(!run(&config, &["init"]).status.success());
}

#[test]
fn validate_rejects_inverted_delay_range() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "[generator]\nmin_delay_ms = 500\nmax_delay_ms = 100\n");

    let out = run(&config, &["validate"]);
    assert!(!out.status.success());
}
