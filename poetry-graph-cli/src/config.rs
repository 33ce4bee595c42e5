//! Configuration file support for the poetry CLI.
//!
//! Loads `poetry.toml` (or the file given with `--config`) and merges it
//! with command-line flags.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI arguments
//! 2. Config file (`[output]`)
//! 3. Hardcoded defaults

use crate::error::{CliError, CliResult};
use crate::output::{GraphFormat, OutputSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "poetry.toml";

/// Top-level config file structure.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PoetryFileConfig {
    /// Output section `[output]`
    #[serde(default)]
    pub output: Option<OutputFileConfig>,
}

/// The `[output]` section. Every field is `Option` so the file only needs to
/// contain values the user wants to set.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct OutputFileConfig {
    pub format: Option<GraphFormat>,
    pub pretty: Option<bool>,
}

/// Load the config file.
///
/// An explicit `--config` path must exist. Without one, `./poetry.toml` is
/// used when present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> CliResult<PoetryFileConfig> {
    let path = match explicit {
        Some(p) if p.is_file() => p.to_path_buf(),
        Some(p) => {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                p.display()
            )))
        }
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("no config file, using defaults");
                return Ok(PoetryFileConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        CliError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    let config = parse_config(&content)?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Parse config file contents.
pub fn parse_config(content: &str) -> CliResult<PoetryFileConfig> {
    Ok(toml::from_str(content)?)
}

fn default_config_path() -> Option<PathBuf> {
    let candidate = std::env::current_dir().ok()?.join(CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

impl OutputSettings {
    /// Merge CLI flags over the config file over defaults.
    pub fn resolve(
        cli_format: Option<GraphFormat>,
        compact: bool,
        config: &PoetryFileConfig,
    ) -> Self {
        let file = config.output.clone().unwrap_or_default();
        let defaults = OutputSettings::default();
        Self {
            format: cli_format.or(file.format).unwrap_or(defaults.format),
            pretty: if compact {
                false
            } else {
                file.pretty.unwrap_or(defaults.pretty)
            },
        }
    }
}
