use crate::config::Config;
use crate::constants::{
    CI_WORKFLOW_DIR, CI_WORKFLOW_FILE, CI_WORKFLOW_TEMPLATE, GITIGNORE_FILE, GITIGNORE_TEMPLATE,
    NPX_BIN, README_FILE,
};
use crate::errors::CreateError;
use crate::process::{best_error_line, CommandRunner};
use crate::ui::warning;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn validate_repo_name(name: &str) -> Result<(), CreateError> {
    let invalid = || CreateError::InvalidInput {
        name: name.to_string(),
    };
    if name.is_empty() || name == "." || name == ".." {
        return Err(invalid());
    }
    if !name
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || ch == '-')
    {
        return Err(invalid());
    }
    Ok(())
}

/// Resolve the workspace path for `name` against the starting directory and
/// create it. An existing non-empty directory is refused before anything is
/// written.
pub(crate) fn prepare_target_dir(name: &str) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let target = cwd.join(name);

    if target.exists() {
        if !target.is_dir() {
            return Err(CreateError::TargetNotEmpty {
                path: target.clone(),
            }
            .into());
        }
        let mut entries = fs::read_dir(&target)
            .with_context(|| format!("failed to read {}", target.display()))?;
        if entries.next().is_some() {
            return Err(CreateError::TargetNotEmpty {
                path: target.clone(),
            }
            .into());
        }
    } else {
        fs::create_dir_all(&target)
            .with_context(|| format!("failed to create {}", target.display()))?;
    }

    Ok(target)
}

/// Scoped change of the process working directory. The original directory is
/// restored exactly once when the guard drops, on every exit path including
/// unwinding.
pub(crate) struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub(crate) fn enter(target: &Path) -> Result<Self> {
        let original = env::current_dir().context("failed to capture current directory")?;
        env::set_current_dir(target)
            .with_context(|| format!("failed to enter {}", target.display()))?;
        Ok(Self { original })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

pub(crate) fn write_starter_files(
    config: &Config,
    runner: &dyn CommandRunner,
    name: &str,
    workspace: &Path,
) -> Result<()> {
    let readme = workspace.join(README_FILE);
    fs::write(&readme, readme_content(name))
        .with_context(|| format!("failed to write {}", readme.display()))?;

    if config.write_gitignore {
        write_ignore_file(config, runner, workspace)?;
    }

    if config.write_ci_workflow {
        let workflow_dir = workspace.join(CI_WORKFLOW_DIR);
        fs::create_dir_all(&workflow_dir)
            .with_context(|| format!("failed to create {}", workflow_dir.display()))?;
        let workflow = workflow_dir.join(CI_WORKFLOW_FILE);
        fs::write(&workflow, CI_WORKFLOW_TEMPLATE)
            .with_context(|| format!("failed to write {}", workflow.display()))?;
    }

    Ok(())
}

pub(crate) fn readme_content(name: &str) -> String {
    format!("# {name}\n")
}

fn write_ignore_file(config: &Config, runner: &dyn CommandRunner, workspace: &Path) -> Result<()> {
    if let Some(template) = config.ignore_template.as_deref() {
        match fetch_ignore_template(runner, template, workspace) {
            Ok(()) => return Ok(()),
            Err(err) => {
                warning(&format!(
                    "failed to fetch gitignore template `{template}`: {err:#}; using built-in template"
                ));
            }
        }
    }

    let path = workspace.join(GITIGNORE_FILE);
    fs::write(&path, GITIGNORE_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn fetch_ignore_template(
    runner: &dyn CommandRunner,
    template: &str,
    workspace: &Path,
) -> Result<()> {
    let output = runner.run(NPX_BIN, &["gitignore", template], Some(workspace))?;
    if !output.success() {
        anyhow::bail!("{}", best_error_line(&output.stderr));
    }
    if !workspace.join(GITIGNORE_FILE).exists() {
        anyhow::bail!("helper exited successfully but wrote no ignore file");
    }
    Ok(())
}
