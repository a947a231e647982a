//! Tests for `ghsec update`.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_update_encrypts_secret_files() {
    let t = Test::with_secrets("acme", STANDARD_SECRETS);

    let output = t.update("acme");
    assert_success(&output);
    assert_stdout_contains(&output, "new");
    assert_stdout_contains(&output, "secret.db.password");

    for (name, _) in STANDARD_SECRETS {
        assert!(t.store().join(format!("{}.enc", name)).is_file());
        assert!(t.store().join(format!("{}.md5", name)).is_file());
    }
    assert_eq!(
        fs::read_to_string(t.store().join("secret.db.password.md5")).unwrap(),
        HUNTER2_FINGERPRINT
    );
}

#[test]
fn test_update_never_stores_plaintext() {
    let t = Test::with_secrets("acme", &[("secret.db.password", "hunter2")]);

    assert_success(&t.update("acme"));

    let blob = fs::read(t.store().join("secret.db.password.enc")).unwrap();
    assert!(!blob.windows(7).any(|w| w == b"hunter2"));
}

#[test]
fn test_second_update_is_up_to_date() {
    let t = Test::with_secrets("acme", STANDARD_SECRETS);
    assert_success(&t.update("acme"));

    t.cmd()
        .args(["update", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"))
        .stdout(predicate::str::contains("unchanged"));
}

#[test]
fn test_update_reports_modified() {
    let t = Test::with_secrets("acme", &[("secret.a", "1"), ("secret.b", "2")]);
    assert_success(&t.update("acme"));

    t.write_secret("secret.b", "changed");
    let output = t.update("acme");

    assert_success(&output);
    assert_stdout_contains(&output, "modified");
}

#[test]
fn test_dry_run_writes_nothing() {
    let t = Test::with_secrets("acme", STANDARD_SECRETS);

    t.cmd()
        .args(["update", "--dry-run", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would encrypt 3 secrets"));

    assert!(!t.store().join("secret.db.password.enc").exists());
}

#[test]
fn test_update_ignores_non_secrets() {
    let t = Test::with_secrets("acme", NON_SECRETS);

    let output = t.update("acme");
    assert_success(&output);
    assert_stdout_contains(&output, "no secret.* files");

    let stored = fs::read_dir(t.store()).unwrap().count();
    assert_eq!(stored, 0);
}

#[test]
fn test_update_uninitialized_project_fails() {
    let t = Test::new();
    t.write_secret("secret.a", "1");

    let output = t.update("acme");
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
    assert_stderr_contains(&output, "ghsec init");
}
