//! Tests for `ghsec init`.

use crate::support::*;
use std::fs;

#[test]
fn test_init_creates_config_and_clone() {
    let t = Test::new();

    let output = t.init_cmd("acme", REMOTE_URL);
    assert_success(&output);
    assert_stdout_contains(&output, "initialized acme");

    let config = t.ghsec_home().join(".config.acme.toml");
    assert!(config.is_file(), "config should exist");
    assert!(t.store().is_dir(), "clone directory should exist");

    let contents = fs::read_to_string(config).unwrap();
    assert!(contents.contains("repo = \"team-secrets\""));
    assert!(contents.contains("branch = \"master\""));
    assert!(contents.contains("key = "));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init("acme");

    let output = t.init_cmd("acme", REMOTE_URL);
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
    assert_stderr_contains(&output, "ghsec purge");
}

#[test]
fn test_init_with_key_uses_it() {
    let t = Test::new();
    let key = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    let output = t.init_with_key("acme", REMOTE_URL, key);
    assert_success(&output);
    assert_stderr_contains(&output, "supplied key");

    let contents = fs::read_to_string(t.ghsec_home().join(".config.acme.toml")).unwrap();
    assert!(contents.contains(key));
}

#[test]
fn test_init_rejects_short_key() {
    let t = Test::new();

    let output = t.init_with_key("acme", REMOTE_URL, "c2hvcnQ=");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid encryption key");
    assert!(!t.ghsec_home().join(".config.acme.toml").exists());
}

#[test]
fn test_init_with_custom_branch() {
    let t = Test::new();

    t.cmd()
        .args(["init", "acme", REMOTE_URL, COMMITTER, "--branch", "main"])
        .assert()
        .success();

    let contents = fs::read_to_string(t.ghsec_home().join(".config.acme.toml")).unwrap();
    assert!(contents.contains("branch = \"main\""));
}

#[test]
fn test_init_respects_home_flag() {
    let t = Test::new();
    let custom = t.home.path().join("elsewhere");

    t.cmd()
        .arg("--home")
        .arg(&custom)
        .args(["init", "acme", REMOTE_URL, COMMITTER])
        .assert()
        .success();

    assert!(custom.join(".config.acme.toml").is_file());
    assert!(!t.ghsec_home().join(".config.acme.toml").exists());
}

#[cfg(unix)]
#[test]
fn test_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init("acme");

    let mode = fs::metadata(t.ghsec_home().join(".config.acme.toml"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
