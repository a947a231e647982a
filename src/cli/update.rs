//! Update command - encrypt changed secret files and publish them.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Home;
use crate::core::domain::UpdateReport;
use crate::core::vault::Vault;
use crate::error::Result;

/// Encrypt changed secrets, or report what would change with `dry_run`.
pub fn execute(home: &Home, project: &str, cwd: &Path, dry_run: bool) -> Result<()> {
    info!(project, dry_run, "running update");

    let vault = Vault::open(home, project)?;

    if dry_run {
        let report = vault.plan(cwd)?;
        print_changes(&report);
        if report.is_up_to_date() {
            output::success("already up to date");
        } else {
            output::warn(&format!(
                "would encrypt {}",
                output::count(report.changed().len(), "secret")
            ));
        }
        return Ok(());
    }

    let report = vault.update(cwd)?;
    print_changes(&report);

    if report.is_up_to_date() {
        output::success("already up to date");
    } else if report.published {
        output::success(&format!(
            "encrypted {} and pushed to {}",
            output::count(report.changed().len(), "secret"),
            vault.project().branch
        ));
    }

    Ok(())
}

fn print_changes(report: &UpdateReport) {
    if report.changes.is_empty() {
        output::dimmed("no secret.* files in this directory");
        return;
    }
    for change in &report.changes {
        output::status_line(change.name.as_str(), change.status);
    }
}
