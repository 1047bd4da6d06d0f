use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "mkrepo",
    version,
    about = "Create a local git repository, publish it to GitHub, and push the first commit"
)]
pub(crate) struct Cli {
    /// Name for the new repository (letters, digits, `.`, `_`, `-`).
    pub(crate) name: Option<String>,

    /// Create the remote repository with public visibility.
    #[arg(long, conflicts_with = "private")]
    pub(crate) public: bool,

    /// Create the remote repository with private visibility (the default).
    #[arg(long)]
    pub(crate) private: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub(crate) fn as_flag(self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Absent or unrecognized visibility resolves to private.
pub(crate) fn resolve_visibility(public: bool, private: bool) -> Visibility {
    if public && !private {
        Visibility::Public
    } else {
        Visibility::Private
    }
}
