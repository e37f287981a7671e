//! Drives the `bragkit` binary against a fake `brag` script installed in a
//! temporary `$HOME/.local/bin`, one of the locations the resolver probes.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_BRAG: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$HOME/args.txt"
if [ -f "$HOME/stderr.txt" ]; then
  cat "$HOME/stderr.txt" >&2
  exit 2
fi
if [ "$1" = "export" ] && [ -f "$HOME/export.out" ]; then
  cat "$HOME/export.out"
fi
"#;

const ENTRIES: &str = r#"[
  {"content": "Migrated the billing DB", "timestamp": "2024-03-01T10:00:00Z", "tags": ["infra"], "project": "payments"},
  {"content": "Mentored a new hire", "timestamp": "2024-03-05T10:00:00Z", "tags": [], "project": null}
]"#;

struct FakeHome {
    dir: TempDir,
}

impl FakeHome {
    /// A home without any brag CLI installed.
    fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn with_cli() -> Self {
        let home = Self::empty();
        let bin = home.cli_path();
        fs::create_dir_all(bin.parent().unwrap()).unwrap();
        fs::write(&bin, FAKE_BRAG).unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        home
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cli_path(&self) -> PathBuf {
        self.path().join(".local/bin/brag")
    }

    fn export_output(&self, text: &str) {
        fs::write(self.path().join("export.out"), text).unwrap();
    }

    fn cli_fails_with(&self, stderr: &str) {
        fs::write(self.path().join("stderr.txt"), stderr).unwrap();
    }

    /// Arguments the fake CLI received on its last run.
    fn received_args(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("args.txt"))
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bragkit").unwrap();
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn add_passes_discrete_arguments() {
    let home = FakeHome::with_cli();

    home.cmd()
        .args(["add", "Shipped", "v2", "--tags", "infra, oncall", "--project", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brag added!"));

    assert_eq!(
        home.received_args(),
        vec!["add", "Shipped v2", "--tags", "infra", "--tags", "oncall", "--project", "core"]
    );
}

#[test]
fn add_keeps_shell_metacharacters_literal() {
    let home = FakeHome::with_cli();
    let content = r#"Fixed "prod"; echo pwned > $HOME/pwned"#;

    home.cmd().args(["add", content]).assert().success();

    assert_eq!(home.received_args(), vec!["add", content]);
    assert!(!home.path().join("pwned").exists());
}

#[test]
fn search_lists_and_filters_entries() {
    let home = FakeHome::with_cli();
    home.export_output(ENTRIES);

    home.cmd()
        .args(["search", "--filter", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated the billing DB"))
        .stdout(predicate::str::contains("[payments] #infra"))
        .stdout(predicate::str::contains("Mentored").not());

    assert_eq!(home.received_args(), vec!["export", "--format", "json"]);
}

#[test]
fn export_print_writes_cli_output() {
    let home = FakeHome::with_cli();
    home.export_output("- Shipped v2\n");

    home.cmd()
        .args(["export", "--start", "2024-01-01", "--format", "text", "--print"])
        .assert()
        .success()
        .stdout("- Shipped v2\n");

    assert_eq!(
        home.received_args(),
        vec!["export", "--start", "2024-01-01", "--format", "text"]
    );
}

#[test]
fn cli_failure_becomes_notification_and_exit_code() {
    let home = FakeHome::with_cli();
    home.cli_fails_with("Error: corrupt data file");

    home.cmd()
        .arg("search")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No brags found."))
        .stderr(predicate::str::contains("Failed to load brags"))
        .stderr(predicate::str::contains("corrupt data file"));
}

#[test]
fn malformed_json_becomes_notification() {
    let home = FakeHome::with_cli();
    home.export_output("this is not json");

    home.cmd()
        .args(["recent", "--days", "14"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No brags found."))
        .stderr(predicate::str::contains("Failed to load brags"));
}

#[test]
fn missing_cli_is_reported() {
    let home = FakeHome::empty();

    // Keep the bare-name fallback from finding a real install on PATH.
    home.cmd()
        .env("PATH", home.path().join("empty-path"))
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn recent_sorts_and_remembers_days() {
    let home = FakeHome::with_cli();
    home.export_output(ENTRIES);

    let out = home
        .cmd()
        .args(["recent", "--days", "30"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();

    let newer = out.find("Mentored a new hire").unwrap();
    let older = out.find("Migrated the billing DB").unwrap();
    assert!(newer < older);

    let args = home.received_args();
    assert_eq!(args[0], "export");
    assert_eq!(args[1], "--start");
    assert_eq!(args[3..], ["--format", "json"]);

    home.cmd()
        .args(["config", "recent-days"])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn doctor_shows_resolved_path() {
    let home = FakeHome::with_cli();
    let expected = home.cli_path().display().to_string();

    home.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Using {}", expected)));
}
