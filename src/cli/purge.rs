//! Purge command - remove a project from this machine.

use tracing::info;

use crate::cli::output;
use crate::core::config::Home;
use crate::core::vault::Vault;
use crate::error::Result;

/// Delete a project's clone and config after confirmation.
pub fn execute(home: &Home, project: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(project)? {
        output::dimmed("aborted");
        return Ok(());
    }

    info!(project, "purging");
    let removed = Vault::purge(home, project)?;

    for path in &removed {
        output::list_item(&output::path(path.display()));
    }
    output::success(&format!("purged {}", project));
    Ok(())
}

fn confirm(project: &str) -> Result<bool> {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(format!(
            "Remove the clone and config of '{}' from this machine?",
            project
        ))
        .default(false)
        .interact()
        .map_err(Into::into)
}
