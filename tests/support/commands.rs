//! Command helper methods for Test.

use super::fixtures::COMMITTER;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a ghsec command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - the offline backend (no git, no network)
    /// - current directory set to the test working directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghsec").expect("failed to find ghsec binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("GHSEC_NO_GIT", "1");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("GHSEC_HOME");
        cmd.env_remove("GHSEC_KEY");
        cmd.env_remove("GHSEC_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .unwrap_or_else(|e| panic!("failed to run ghsec {}: {}", args.join(" "), e))
    }

    /// Shortcut for `ghsec init <project> <url> <committer>`.
    pub fn init_cmd(&self, project: &str, url: &str) -> Output {
        self.run(&["init", project, url, COMMITTER])
    }

    /// Shortcut for `ghsec init` joining with an existing key.
    pub fn init_with_key(&self, project: &str, url: &str, key: &str) -> Output {
        self.run(&["init", project, url, COMMITTER, "--key", key])
    }

    /// Shortcut for `ghsec update <project>`.
    pub fn update(&self, project: &str) -> Output {
        self.run(&["update", project])
    }

    /// Shortcut for `ghsec update --dry-run <project>`.
    pub fn update_dry_run(&self, project: &str) -> Output {
        self.run(&["update", "--dry-run", project])
    }

    /// Shortcut for `ghsec extract <project>`.
    pub fn extract(&self, project: &str) -> Output {
        self.run(&["extract", project])
    }

    /// Shortcut for `ghsec status <project>`.
    pub fn status(&self, project: &str) -> Output {
        self.run(&["status", project])
    }

    /// Shortcut for `ghsec status --json <project>`.
    pub fn status_json(&self, project: &str) -> Output {
        self.run(&["status", "--json", project])
    }

    /// Shortcut for `ghsec rm <project> <files...>`.
    pub fn rm(&self, project: &str, files: &[&str]) -> Output {
        let mut args = vec!["rm", project];
        args.extend_from_slice(files);
        self.run(&args)
    }

    /// Shortcut for `ghsec purge --yes <project>`.
    pub fn purge(&self, project: &str) -> Output {
        self.run(&["purge", "--yes", project])
    }
}
