//! End-to-end CLI tests for the preflight binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn preflight() -> Command {
    cargo_bin_cmd!("preflight")
}

/// Write a workspace manifest carrying the given rust-version pin.
fn manifest_with_pin(dir: &TempDir, pin: &str) -> PathBuf {
    let path = dir.path().join("Cargo.toml");
    std::fs::write(
        &path,
        format!("[workspace]\nmembers = []\n\n[workspace.package]\nrust-version = \"{pin}\"\n"),
    )
    .unwrap();
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        preflight()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("preflight"))
            .stdout(predicate::str::contains("--registry-host"))
            .stdout(predicate::str::contains("--timeout"));
    }

    #[test]
    fn shows_version() {
        preflight()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_options() {
        preflight()
            .arg("--bogus")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("unknown option"));
    }

    #[test]
    fn rejects_missing_flag_value() {
        preflight()
            .arg("--registry-host")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("--registry-host expects"));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        preflight()
            .args(["--timeout", "soon"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("--timeout expects"));
    }
}

// ============================================
// Toolchain Check Tests
// ============================================

mod toolchain_check {
    use super::*;

    #[test]
    fn passes_when_pin_is_below_installed() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_with_pin(&temp, "1.0.0");

        preflight()
            .args(["--manifest", manifest.to_str().unwrap()])
            .args(["--registry-host", "localhost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[OK] rustc"));
    }

    #[test]
    fn fails_when_pin_exceeds_installed() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_with_pin(&temp, "99.0.0");

        preflight()
            .args(["--manifest", manifest.to_str().unwrap()])
            .args(["--registry-host", "localhost"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("[FAIL]"))
            .stdout(predicate::str::contains("99.0.0"))
            .stderr(predicate::str::contains("Preflight checks failed"));
    }

    #[test]
    fn fails_when_manifest_has_no_pin() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Cargo.toml");
        std::fs::write(&manifest, "[workspace]\nmembers = []\n").unwrap();

        preflight()
            .args(["--manifest", manifest.to_str().unwrap()])
            .args(["--registry-host", "localhost"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("[FAIL]"))
            .stdout(predicate::str::contains("no rust-version pin"));
    }
}

// ============================================
// Registry DNS Check Tests
// ============================================

mod registry_check {
    use super::*;

    #[test]
    fn reports_resolved_address() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_with_pin(&temp, "1.0.0");

        preflight()
            .args(["--manifest", manifest.to_str().unwrap()])
            .args(["--registry-host", "localhost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("localhost ->"));
    }

    #[test]
    fn fails_on_unresolvable_host() {
        let temp = TempDir::new().unwrap();
        let manifest = manifest_with_pin(&temp, "1.0.0");

        // RFC 2606 reserves .invalid; it never resolves.
        preflight()
            .args(["--manifest", manifest.to_str().unwrap()])
            .args(["--registry-host", "registry.invalid"])
            .args(["--timeout", "10"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("[FAIL]"))
            .stdout(predicate::str::contains("registry.invalid"))
            .stderr(predicate::str::contains("Preflight checks failed"));
    }
}
