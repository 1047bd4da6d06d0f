pub(crate) const GIT_BIN: &str = "git";
pub(crate) const GH_BIN: &str = "gh";
pub(crate) const NPX_BIN: &str = "npx";

pub(crate) const PRIMARY_BRANCH: &str = "main";
pub(crate) const REMOTE_NAME: &str = "origin";
pub(crate) const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

pub(crate) const README_FILE: &str = "README.md";
pub(crate) const GITIGNORE_FILE: &str = ".gitignore";
pub(crate) const CI_WORKFLOW_DIR: &str = ".github/workflows";
pub(crate) const CI_WORKFLOW_FILE: &str = "ci.yml";

pub(crate) const GITIGNORE_TEMPLATE: &str = "\
# Dependencies
node_modules/
vendor/

# Build output
target/
dist/
build/
out/

# Environment
.env
.env.local

# Logs and OS noise
*.log
.DS_Store
Thumbs.db
";

pub(crate) const CI_WORKFLOW_TEMPLATE: &str = "\
name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Build
        run: echo 'add build steps here'
";
