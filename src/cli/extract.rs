//! Extract command - decrypt all secrets into the working directory.

use std::path::Path;

use tracing::info;

use crate::cli::{display_path, output};
use crate::core::config::Home;
use crate::core::vault::Vault;
use crate::error::Result;

/// Decrypt every stored secret into `cwd`.
pub fn execute(home: &Home, project: &str, cwd: &Path) -> Result<()> {
    info!(project, "running extract");

    let vault = Vault::open(home, project)?;
    let report = vault.extract(cwd)?;

    if report.written.is_empty() {
        output::dimmed("no secrets stored for this project");
        return Ok(());
    }

    for path in &report.written {
        output::list_item(&display_path(path, cwd));
    }
    output::success(&format!(
        "extracted {}",
        output::count(report.written.len(), "secret")
    ));
    Ok(())
}
