use crate::cli::Visibility;
use crate::config::Config;
use crate::git::create_initial_commit;
use crate::integrations::launch_all;
use crate::preflight::{ensure_authenticated, ensure_dependencies};
use crate::process::CommandRunner;
use crate::ui::progress;
use crate::workspace::{prepare_target_dir, validate_repo_name, write_starter_files, CwdGuard};
use anyhow::Result;

/// The whole workflow: validate, preflight, initialize the workspace, commit,
/// publish, then best-effort launches. Strictly sequential; the first fatal
/// error aborts everything after it. The starting working directory is
/// restored on every exit path.
pub(crate) fn cmd_create(
    config: &Config,
    runner: &dyn CommandRunner,
    name: &str,
    visibility: Visibility,
) -> Result<()> {
    validate_repo_name(name)?;

    progress("create: checking required tools");
    ensure_dependencies(runner)?;
    ensure_authenticated(runner)?;

    progress(&format!("create: preparing directory `{name}`"));
    let workspace = prepare_target_dir(name)?;
    let _cwd = CwdGuard::enter(&workspace)?;

    progress("create: writing starter files");
    write_starter_files(config, runner, name, &workspace)?;

    progress("create: committing initial files");
    create_initial_commit(runner, &workspace)?;

    progress(&format!(
        "create: publishing `{name}` to GitHub ({visibility})"
    ));
    crate::remote::publish(runner, name, visibility, &workspace)?;

    launch_all(config, runner, &workspace);

    println!("Repository '{name}' created successfully!");
    Ok(())
}
