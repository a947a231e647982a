//! Git backend.
//!
//! Drives the `git` CLI as a subprocess, one command at a time, inside the
//! clone directory. Refreshing resets the clone to its upstream and removes
//! untracked artifacts, so whatever a failed run left behind is rebuilt by
//! the next update. Output is captured and logged at debug level; a non-zero
//! exit status becomes `VcsError::CommandFailed` carrying git's stderr.
//!
//! ## Requirements
//!
//! - `git` must be on `PATH`
//! - Push credentials (ssh agent, credential helper) must work
//!   non-interactively

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};

use super::Vcs;
use crate::error::{Result, VcsError};

/// Git backend using the git CLI.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
}

impl Git {
    /// Find git on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `VcsError::NotInstalled` if git cannot be found.
    pub fn locate() -> Result<Self> {
        let program = which::which("git").map_err(|_| VcsError::NotInstalled)?;
        debug!(program = %program.display(), "found git");
        Ok(Self { program })
    }

    /// Use a specific git binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn(&self, dir: &Path, args: &[OsString]) -> Result<(String, Output)> {
        let command = describe(args);
        trace!(dir = %dir.display(), %command, "running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            debug!("{}", line);
        }
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            debug!("{}", line);
        }

        Ok((command, output))
    }

    /// Run a git command and fail on a non-zero exit status.
    fn run(&self, dir: &Path, args: &[OsString]) -> Result<()> {
        let (command, output) = self.spawn(dir, args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(VcsError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            }
            .into());
        }
        Ok(())
    }

    /// Whether the current branch tracks a remote branch that exists.
    ///
    /// False for a clone of an empty repository.
    fn has_upstream(&self, repo: &Path) -> Result<bool> {
        let (_, output) = self.spawn(
            repo,
            &args(["rev-parse", "--quiet", "--verify", "@{u}"]),
        )?;
        Ok(output.status.success())
    }

    /// Whether the index differs from HEAD.
    fn has_staged_changes(&self, repo: &Path) -> Result<bool> {
        let (_, output) = self.spawn(repo, &args(["diff", "--cached", "--quiet"]))?;
        Ok(!output.status.success())
    }

    fn commit_and_push(&self, repo: &Path, branch: &str, message: &str) -> Result<()> {
        if !self.has_staged_changes(repo)? {
            debug!("nothing staged, skipping commit");
            return Ok(());
        }

        self.run(repo, &args(["commit", "--quiet", "-m", message]))?;
        self.run(repo, &args(["push", "--quiet", "origin", branch]))
    }
}

impl Vcs for Git {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let parent = dest.parent().unwrap_or_else(|| Path::new("."));
        debug!(url, dest = %dest.display(), "cloning");

        let mut argv = args(["clone", "--quiet", url]);
        argv.push(dest.as_os_str().to_os_string());
        self.run(parent, &argv)
    }

    fn configure_committer(&self, repo: &Path, name: &str, email: &str) -> Result<()> {
        self.run(repo, &args(["config", "user.name", name]))?;
        self.run(repo, &args(["config", "user.email", email]))
    }

    fn refresh(&self, repo: &Path) -> Result<()> {
        debug!(repo = %repo.display(), "refreshing clone");
        self.run(repo, &args(["fetch", "--quiet", "origin"]))?;

        // Unpushed commits from a failed push are dropped along with edits;
        // their secrets read as new on the next update and get republished.
        if self.has_upstream(repo)? {
            self.run(repo, &args(["reset", "--quiet", "--hard", "@{u}"]))?;
        } else {
            debug!("no upstream yet, keeping local branch");
        }

        // Artifacts written by an aborted update were never staged
        self.run(
            repo,
            &args(["clean", "--quiet", "--force", "--", "*.enc", "*.md5"]),
        )
    }

    fn publish(&self, repo: &Path, paths: &[PathBuf], branch: &str, message: &str) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut argv = args(["add", "--"]);
        argv.extend(relative(repo, paths));
        self.run(repo, &argv)?;

        self.commit_and_push(repo, branch, message)
    }

    fn publish_removal(
        &self,
        repo: &Path,
        paths: &[PathBuf],
        branch: &str,
        message: &str,
    ) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        // Files are already gone from the working tree; only the index changes
        let mut argv = args(["rm", "--cached", "--quiet", "--ignore-unmatch", "--"]);
        argv.extend(relative(repo, paths));
        self.run(repo, &argv)?;

        self.commit_and_push(repo, branch, message)
    }

    fn name(&self) -> &'static str {
        "git"
    }
}

fn args<const N: usize>(items: [&str; N]) -> Vec<OsString> {
    items.into_iter().map(OsString::from).collect()
}

/// Paths as git pathspecs relative to the clone root.
fn relative(repo: &Path, paths: &[PathBuf]) -> Vec<OsString> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(repo)
                .unwrap_or(p)
                .as_os_str()
                .to_os_string()
        })
        .collect()
}

fn describe(args: &[OsString]) -> String {
    let mut command = String::from("git");
    for arg in args.iter().take(2) {
        command.push(' ');
        command.push_str(&arg.to_string_lossy());
    }
    command
}
