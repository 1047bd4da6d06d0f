use crate::constants::{GH_BIN, GIT_BIN};
use crate::errors::CreateError;
use crate::process::{binary_available, CommandRunner};
use anyhow::Result;

/// Tools the workflow cannot run without. Checked before any filesystem or
/// network mutation so a failing environment never leaves a half-created
/// workspace behind.
const REQUIRED_TOOLS: &[&str] = &[GIT_BIN, GH_BIN];

pub(crate) fn ensure_dependencies(runner: &dyn CommandRunner) -> Result<()> {
    for tool in REQUIRED_TOOLS {
        if !binary_available(runner, tool) {
            return Err(CreateError::MissingDependency {
                tool: (*tool).to_string(),
            }
            .into());
        }
    }
    Ok(())
}

pub(crate) fn ensure_authenticated(runner: &dyn CommandRunner) -> Result<()> {
    let output = runner.run(GH_BIN, &["auth", "status"], None)?;
    if !output.success() {
        return Err(CreateError::NotAuthenticated.into());
    }
    Ok(())
}
