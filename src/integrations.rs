use crate::config::Config;
use crate::process::{CommandRunner, CmdOutput};
use crate::ui::warning;
use std::path::Path;

/// Best-effort convenience launches. A failure here is reported as a warning
/// and never changes the workflow outcome or exit code.
pub(crate) fn launch_all(config: &Config, runner: &dyn CommandRunner, workspace: &Path) {
    if let Some(editor) = config.editor_bin.as_deref() {
        launch(runner, "editor", editor, workspace);
    }
    if let Some(desktop) = config.desktop_bin.as_deref() {
        launch(runner, "desktop app", desktop, workspace);
    }
}

fn launch(runner: &dyn CommandRunner, label: &str, bin: &str, workspace: &Path) {
    let path = workspace.display().to_string();
    match runner.run_inherit(bin, &[path.as_str()], None) {
        Ok(CmdOutput { code: Some(0), .. }) => {}
        Ok(output) => warning(&format!(
            "{label} `{bin}` exited with code {}",
            output.code_or_unknown()
        )),
        Err(err) => warning(&format!("failed to launch {label} `{bin}`: {err:#}")),
    }
}
