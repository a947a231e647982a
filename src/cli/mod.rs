//! Command-line interface.

pub mod completions;
pub mod extract;
pub mod init;
pub mod output;
pub mod purge;
pub mod rm;
pub mod status;
pub mod update;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::config::Home;
use crate::error::Result;

/// ghsec - Share encrypted secret files with your team through git.
#[derive(Parser)]
#[command(
    name = "ghsec",
    about = "Share encrypted secret files with your team through a git repository",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ghsec home directory (defaults to ~/.ghsec)
    #[arg(long, global = true, env = "GHSEC_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Clone a secrets repository and create the project config
    Init {
        /// Name of the project to initialize
        project: String,
        /// URL of the repository that stores the secrets
        url: String,
        /// Name to associate with commits from this machine
        committer: Option<String>,
        /// Existing Base64 key (when joining a team); generated if omitted
        #[arg(long, env = "GHSEC_KEY", hide_env_values = true)]
        key: Option<String>,
        /// Branch to push to
        #[arg(long, default_value = crate::core::constants::DEFAULT_BRANCH)]
        branch: String,
    },

    /// Encrypt changed secret.* files and push them
    Update {
        /// Name of the project
        project: String,
        /// Show what would be encrypted without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Decrypt all secrets into the current directory
    Extract {
        /// Name of the project
        project: String,
    },

    /// Show which secret files changed since the last update
    Status {
        /// Name of the project
        project: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove secrets from the project
    Rm {
        /// Name of the project
        project: String,
        /// Secret files to remove
        #[arg(required = true)]
        files: Vec<String>,
        /// Keep the local plaintext copies
        #[arg(long)]
        keep_local: bool,
    },

    /// Remove a project's clone and config from this machine
    Purge {
        /// Name of the project
        project: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, home: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let command = match command {
        Completions { shell } => return completions::execute(shell),
        other => other,
    };

    let home = Home::resolve(home)?;
    let cwd = std::env::current_dir()?;

    match command {
        Init {
            project,
            url,
            committer,
            key,
            branch,
        } => init::execute(&home, &project, url, committer, key, branch),
        Update { project, dry_run } => update::execute(&home, &project, &cwd, dry_run),
        Extract { project } => extract::execute(&home, &project, &cwd),
        Status { project, json } => status::execute(&home, &project, &cwd, json),
        Rm {
            project,
            files,
            keep_local,
        } => rm::execute(&home, &project, &cwd, &files, keep_local),
        Purge { project, yes } => purge::execute(&home, &project, yes),
        Completions { .. } => Ok(()),
    }
}

/// Display a path relative to the working directory when it lies inside it.
pub(crate) fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}
