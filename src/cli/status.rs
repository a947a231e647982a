//! Status command - show which secret files differ from the store.

use std::path::Path;

use serde::Serialize;

use crate::cli::output;
use crate::core::config::Home;
use crate::core::domain::Change;
use crate::core::vault::Vault;
use crate::error::Result;

#[derive(Serialize)]
struct StatusJson<'a> {
    project: &'a str,
    store: String,
    branch: &'a str,
    secrets: &'a [Change],
}

/// Show the sync status of every secret file in `cwd`.
pub fn execute(home: &Home, project: &str, cwd: &Path, json: bool) -> Result<()> {
    let vault = Vault::open(home, project)?;
    let report = vault.plan(cwd)?;

    if json {
        let status = StatusJson {
            project,
            store: vault.store().root().display().to_string(),
            branch: &vault.project().branch,
            secrets: &report.changes,
        };
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    output::section("ghsec status");
    output::kv("project", project);
    output::kv("store", output::path(vault.store().root().display()));
    output::kv("branch", &vault.project().branch);
    output::kv("backend", vault.backend());
    println!();

    if report.changes.is_empty() {
        output::dimmed("no secret.* files in this directory");
        return Ok(());
    }

    for change in &report.changes {
        output::status_line(change.name.as_str(), change.status);
    }

    let pending = report.changed().len();
    println!();
    if pending == 0 {
        output::success("everything is up to date");
    } else {
        output::hint(&format!(
            "{} pending, run: {}",
            output::count(pending, "secret"),
            output::cmd(&format!("ghsec update {}", project))
        ));
    }

    Ok(())
}
