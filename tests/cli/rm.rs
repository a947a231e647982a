//! Tests for `ghsec rm`.

use crate::support::*;

#[test]
fn test_rm_removes_artifacts_and_local_copy() {
    let t = Test::with_secrets("acme", STANDARD_SECRETS);
    assert_success(&t.update("acme"));

    let output = t.rm("acme", &["secret.api.token"]);
    assert_success(&output);
    assert_stdout_contains(&output, "removed 1 secret");

    assert!(!t.store().join("secret.api.token.enc").exists());
    assert!(!t.store().join("secret.api.token.md5").exists());
    assert!(!t.path("secret.api.token").exists());
    assert!(t.store().join("secret.db.password.enc").exists());
}

#[test]
fn test_rm_keep_local() {
    let t = Test::with_secrets("acme", &[("secret.a", "1")]);
    assert_success(&t.update("acme"));

    t.cmd()
        .args(["rm", "--keep-local", "acme", "secret.a"])
        .assert()
        .success();

    assert!(t.path("secret.a").exists());
    assert!(!t.store().join("secret.a.enc").exists());
}

#[test]
fn test_rm_accepts_artifact_name() {
    let t = Test::with_secrets("acme", &[("secret.a", "1")]);
    assert_success(&t.update("acme"));

    assert_success(&t.rm("acme", &["secret.a.enc"]));
    assert!(!t.store().join("secret.a.enc").exists());
}

#[test]
fn test_rm_unknown_secret_fails() {
    let t = Test::with_secrets("acme", &[("secret.a", "1")]);
    assert_success(&t.update("acme"));

    let output = t.rm("acme", &["secret.a", "secret.nope"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
    assert!(t.store().join("secret.a.enc").exists());
    assert!(t.path("secret.a").exists());
}

#[test]
fn test_rm_invalid_name_fails() {
    let t = Test::init("acme");

    let output = t.rm("acme", &["notes.txt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret name");
}

#[test]
fn test_rm_requires_files() {
    let t = Test::init("acme");

    t.cmd().args(["rm", "acme"]).assert().failure();
}
