use crate::constants::{GIT_BIN, INITIAL_COMMIT_MESSAGE, PRIMARY_BRANCH};
use crate::errors::CreateError;
use crate::process::{best_error_line, CommandRunner};
use anyhow::{Context, Result};
use std::path::Path;

/// Initialize a repository on the fixed primary branch, stage everything,
/// and produce the first commit. Each step aborts on non-zero exit.
pub(crate) fn create_initial_commit(runner: &dyn CommandRunner, workspace: &Path) -> Result<()> {
    run_step(
        runner,
        workspace,
        "init",
        &["init", "-b", PRIMARY_BRANCH],
    )?;
    run_step(runner, workspace, "add", &["add", "."])?;
    run_step(
        runner,
        workspace,
        "commit",
        &["commit", "-m", INITIAL_COMMIT_MESSAGE],
    )?;
    Ok(())
}

fn run_step(
    runner: &dyn CommandRunner,
    workspace: &Path,
    step: &'static str,
    args: &[&str],
) -> Result<()> {
    let output = runner
        .run(GIT_BIN, args, Some(workspace))
        .with_context(|| format!("failed to run git {step}"))?;
    if !output.success() {
        return Err(CreateError::VersionControlFailed {
            step,
            code: output.code_or_unknown(),
            detail: best_error_line(&output.stderr),
        }
        .into());
    }
    Ok(())
}
