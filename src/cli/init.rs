//! Init command - clone the secrets repository and write the project config.

use tracing::info;

use crate::cli::output;
use crate::core::config::Home;
use crate::core::vault::{InitOptions, Vault};
use crate::core::vcs;
use crate::error::Result;

/// Initialize a project.
pub fn execute(
    home: &Home,
    project: &str,
    url: String,
    committer: Option<String>,
    key: Option<String>,
    branch: String,
) -> Result<()> {
    let committer = committer.unwrap_or_else(whoami::realname);
    let joining = key.is_some();
    info!(project, committer = %committer, "initializing");

    let options = InitOptions {
        url,
        committer,
        key,
        branch,
    };
    let vault = Vault::init(home, project, options, vcs::default_backend()?)?;

    output::success(&format!("initialized {}", project));
    output::kv("clone", output::path(vault.store().root().display()));
    output::kv(
        "config",
        output::path(home.config_path(project).display()),
    );
    output::kv("branch", &vault.project().branch);

    if joining {
        output::hint("using the supplied key; extract to check it matches the team's");
    } else {
        output::hint(&format!(
            "new key generated; share the `key` value in {} with your team over a secure channel",
            home.config_path(project).display()
        ));
    }

    Ok(())
}
