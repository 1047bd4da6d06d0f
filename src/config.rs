use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    editor_bin: Option<String>,
    desktop_bin: Option<String>,
    ignore_template: Option<String>,
    write_gitignore: Option<bool>,
    write_ci_workflow: Option<bool>,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Editor launched against the new workspace after publishing; disabled
    /// when unset.
    pub(crate) editor_bin: Option<String>,
    /// Desktop companion launched the same way; disabled when unset.
    pub(crate) desktop_bin: Option<String>,
    /// Template name fetched via `npx gitignore <template>` instead of the
    /// built-in ignore file.
    pub(crate) ignore_template: Option<String>,
    pub(crate) write_gitignore: bool,
    pub(crate) write_ci_workflow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor_bin: None,
            desktop_bin: None,
            ignore_template: None,
            write_gitignore: true,
            write_ci_workflow: false,
        }
    }
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let mut config = Self::default();
        for path in config_paths() {
            if !path.exists() {
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let parsed: PartialConfig = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            config.apply(parsed);
            break;
        }
        Ok(config)
    }

    fn apply(&mut self, parsed: PartialConfig) {
        if let Some(editor_bin) = parsed.editor_bin {
            if !editor_bin.trim().is_empty() {
                self.editor_bin = Some(editor_bin);
            }
        }
        if let Some(desktop_bin) = parsed.desktop_bin {
            if !desktop_bin.trim().is_empty() {
                self.desktop_bin = Some(desktop_bin);
            }
        }
        if let Some(ignore_template) = parsed.ignore_template {
            if !ignore_template.trim().is_empty() {
                self.ignore_template = Some(ignore_template);
            }
        }
        if let Some(write_gitignore) = parsed.write_gitignore {
            self.write_gitignore = write_gitignore;
        }
        if let Some(write_ci_workflow) = parsed.write_ci_workflow {
            self.write_ci_workflow = write_ci_workflow;
        }
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mkrepo").join("config.toml"));
    }
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".mkrepo.toml"));
    }
    paths
}

#[cfg(test)]
impl Config {
    pub(crate) fn from_toml(raw: &str) -> Result<Self> {
        let parsed: PartialConfig = toml::from_str(raw).context("failed to parse config")?;
        let mut config = Self::default();
        config.apply(parsed);
        Ok(config)
    }
}
