use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the create workflow. Every variant aborts the run;
/// integration launches never produce one of these (they only warn).
#[derive(Debug, Error)]
pub(crate) enum CreateError {
    #[error(
        "invalid repository name `{name}`: only letters, digits, `.`, `_`, and `-` are allowed"
    )]
    InvalidInput { name: String },

    #[error("required tool `{tool}` is not installed or not on PATH")]
    MissingDependency { tool: String },

    #[error("GitHub CLI is not authenticated; run `gh auth login` first")]
    NotAuthenticated,

    #[error("target directory {} already exists and is not empty", .path.display())]
    TargetNotEmpty { path: PathBuf },

    #[error("git {step} failed with exit code {code}: {detail}")]
    VersionControlFailed {
        step: &'static str,
        code: i32,
        detail: String,
    },

    #[error("failed to create remote repository (exit code {code}): {detail}")]
    RemoteCreateFailed { code: i32, detail: String },
}
