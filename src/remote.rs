use crate::cli::Visibility;
use crate::constants::{GH_BIN, REMOTE_NAME};
use crate::errors::CreateError;
use crate::process::{best_error_line, CommandRunner};
use anyhow::{Context, Result};
use std::path::Path;

/// Create the hosted repository and push the local history in one call. On
/// failure nothing local is rolled back; the local repository stays usable.
pub(crate) fn publish(
    runner: &dyn CommandRunner,
    name: &str,
    visibility: Visibility,
    workspace: &Path,
) -> Result<()> {
    let remote_flag = format!("--remote={REMOTE_NAME}");
    let output = runner
        .run(
            GH_BIN,
            &[
                "repo",
                "create",
                name,
                visibility.as_flag(),
                "--source=.",
                &remote_flag,
                "--push",
            ],
            Some(workspace),
        )
        .context("failed to run gh repo create")?;
    if !output.success() {
        return Err(CreateError::RemoteCreateFailed {
            code: output.code_or_unknown(),
            detail: best_error_line(&output.stderr),
        }
        .into());
    }
    Ok(())
}
