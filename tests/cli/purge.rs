//! Tests for `ghsec purge`.

use crate::support::*;

#[test]
fn test_purge_removes_project() {
    let t = Test::with_secrets("acme", &[("secret.a", "1")]);
    assert_success(&t.update("acme"));

    let output = t.purge("acme");
    assert_success(&output);
    assert_stdout_contains(&output, "purged acme");

    assert!(!t.store().exists());
    assert!(!t.ghsec_home().join(".config.acme.toml").exists());
    // Plaintext in the working directory is untouched
    assert!(t.path("secret.a").exists());
}

#[test]
fn test_purge_then_init_again() {
    let t = Test::init("acme");
    assert_success(&t.purge("acme"));

    assert_success(&t.init_cmd("acme", REMOTE_URL));
}

#[test]
fn test_purge_unknown_project_fails() {
    let t = Test::new();

    let output = t.purge("acme");
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_purge_leaves_other_projects() {
    let t = Test::init("acme");
    assert_success(&t.init_cmd("other", "/srv/git/other-secrets.git"));

    assert_success(&t.purge("acme"));

    assert!(t.ghsec_home().join(".config.other.toml").is_file());
    assert!(t.ghsec_home().join("other-secrets").is_dir());
}
