//! ghsec - Share encrypted secret files with your team through git.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghsec::cli::output;
use ghsec::cli::{execute, Cli};
use ghsec::error::{ConfigError, Error, StoreError, VcsError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GHSEC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghsec=debug")
        } else {
            EnvFilter::new("ghsec=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.home) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Next step for errors the user can fix.
fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::NotInitialized(_)) => {
            Some("run: ghsec init <project> <repository-url>")
        }
        Error::Config(ConfigError::AlreadyInitialized(_)) => {
            Some("run: ghsec purge <project> to start over")
        }
        Error::Config(ConfigError::InvalidKey(_)) => {
            Some("the key must be the Base64 encoding of exactly 32 bytes")
        }
        Error::Store(StoreError::NotFound(_)) => Some("run: ghsec status <project> to list secrets"),
        Error::Vcs(VcsError::NotInstalled) => {
            Some("install git, or set GHSEC_NO_GIT=1 to work without it")
        }
        e if e.is_authentication_failure() => {
            Some("check that the project key matches the one your team uses")
        }
        _ => None,
    }
}
