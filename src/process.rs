use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub(crate) struct CmdOutput {
    pub(crate) code: Option<i32>,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl CmdOutput {
    pub(crate) fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub(crate) fn code_or_unknown(&self) -> i32 {
        self.code.unwrap_or(-1)
    }
}

/// Single seam for external command execution. The workflow only talks to
/// this trait so tests can substitute a recording fake for real spawning.
pub(crate) trait CommandRunner {
    /// Run to completion, capturing stdout and stderr.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CmdOutput>;

    /// Run to completion with stdio inherited from this process.
    fn run_inherit(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CmdOutput>;
}

/// Real executor backed by `std::process::Command`. Blocks until the child
/// exits; there is no timeout.
pub(crate) struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CmdOutput> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }
        let output = command
            .output()
            .with_context(|| format!("failed to run `{program}`"))?;

        Ok(CmdOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn run_inherit(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CmdOutput> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());

        let status = command
            .status()
            .with_context(|| format!("failed to run `{program}`"))?;
        Ok(CmdOutput {
            code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

pub(crate) fn binary_available(runner: &dyn CommandRunner, bin: &str) -> bool {
    runner
        .run(bin, &["--version"], None)
        .map(|output| output.success())
        .unwrap_or(false)
}

pub(crate) fn best_error_line(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return "unknown error".to_string();
    }

    if let Some(line) = lines
        .iter()
        .find(|line| line.to_ascii_lowercase().starts_with("error:"))
    {
        return (*line).to_string();
    }

    lines
        .last()
        .map(|line| (*line).to_string())
        .unwrap_or_else(|| "unknown error".to_string())
}
