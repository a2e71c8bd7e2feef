use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::render::{AppendFile, Console, Format, OverwriteFile, Pipeline};
use crate::source::DEFAULT_ENV_VAR;
use crate::util::xdg;

const CONFIG_FILE: &str = "config.toml";

/// Settings read from `$XDG_CONFIG_HOME/paths/config.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Variable read when no list file is given
    #[serde(default = "default_env_var")]
    pub env_var: String,
    /// JSON list file used instead of the environment
    #[serde(default)]
    pub list_file: Option<String>,
    /// Pipelines driven by `paths render`
    #[serde(default, rename = "render")]
    pub renders: Vec<RenderConfig>,
}

/// One `[[render]]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: Format,
    #[serde(default = "default_stdout")]
    pub stdout: bool,
    /// Files overwritten with the rendered text
    #[serde(default)]
    pub write: Vec<String>,
    /// Files the rendered text is appended to
    #[serde(default)]
    pub append: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            list_file: None,
            renders: Vec::new(),
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        Ok(xdg::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// `list_file` with `~` and environment variables expanded
    pub fn list_file(&self) -> Result<Option<PathBuf>> {
        self.list_file.as_deref().map(expand).transpose()
    }
}

impl RenderConfig {
    /// Build the pipeline described by this table
    pub fn pipeline(&self, var: &str) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new(self.format.formatter(var));
        if self.stdout {
            pipeline = pipeline.with_sink(Console);
        }
        for path in &self.write {
            pipeline = pipeline.with_sink(OverwriteFile::new(expand(path)?));
        }
        for path in &self.append {
            pipeline = pipeline.with_sink(AppendFile::new(expand(path)?));
        }
        Ok(pipeline)
    }
}

fn expand(path: &str) -> Result<PathBuf> {
    let expanded =
        shellexpand::full(path).with_context(|| format!("Failed to expand path '{path}'"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

fn default_env_var() -> String {
    DEFAULT_ENV_VAR.to_string()
}

fn default_stdout() -> bool {
    true
}
