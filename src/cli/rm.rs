//! Rm command - remove secrets from the project.

use std::path::Path;

use tracing::info;

use crate::cli::{display_path, output};
use crate::core::config::Home;
use crate::core::domain::SecretName;
use crate::core::vault::Vault;
use crate::error::Result;

/// Remove the named secret files from the store and push the deletion.
pub fn execute(
    home: &Home,
    project: &str,
    cwd: &Path,
    files: &[String],
    keep_local: bool,
) -> Result<()> {
    // Accept `secret.x` as well as `./secret.x` or `secret.x.enc`
    let names = files
        .iter()
        .map(|f| {
            let base = Path::new(f)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(f);
            SecretName::from_ciphertext_file(base)
                .map(Ok)
                .unwrap_or_else(|| base.parse::<SecretName>())
        })
        .collect::<Result<Vec<_>>>()?;

    info!(project, count = names.len(), keep_local, "running rm");

    let vault = Vault::open(home, project)?;
    let report = vault.remove(cwd, &names, keep_local)?;

    for name in &report.removed {
        output::list_item(name.as_str());
    }
    for path in &report.local {
        output::dimmed(&format!("  deleted {}", display_path(path, cwd)));
    }
    output::success(&format!(
        "removed {}",
        output::count(report.removed.len(), "secret")
    ));
    Ok(())
}
