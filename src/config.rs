use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::{Category, Report};

/// Root configuration structure, deserialized from `.journal-checkr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Reference list locations.
    #[serde(default)]
    pub lists: ListsConfig,
    /// Which categories fail the run.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Paths to the newline-separated reference lists.
#[derive(Debug, Default, Deserialize)]
pub struct ListsConfig {
    /// Trusted (quality-indexed) journals. Required.
    pub trusted: Option<PathBuf>,
    /// Preprint servers. Falls back to the built-in list.
    pub preprints: Option<PathBuf>,
    /// Known predatory journals. Empty when unset.
    pub predatory: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PolicyConfig {
    /// Categories that make the CLI exit with code 1, e.g. `["predatory"]`.
    #[serde(default)]
    pub fail_on: Vec<Category>,
}

impl ListsConfig {
    /// Resolve relative list paths against the config file's directory.
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.trusted, &mut self.preprints, &mut self.predatory]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Command-line paths take precedence over the config file.
    pub fn override_with(
        &mut self,
        trusted: Option<PathBuf>,
        preprints: Option<PathBuf>,
        predatory: Option<PathBuf>,
    ) {
        if trusted.is_some() {
            self.trusted = trusted;
        }
        if preprints.is_some() {
            self.preprints = preprints;
        }
        if predatory.is_some() {
            self.predatory = predatory;
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<bib_dir>/.journal-checkr/config.toml`
/// 3. `~/.config/journal-checkr/config.toml`
/// 4. Built-in [`Config::default`] (no lists, nothing fails the run)
pub fn load_config(bib_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = bib_dir.join(".journal-checkr").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("journal-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;

    if let Some(dir) = path.parent() {
        config.lists.resolve_relative_to(dir);
    }
    debug!("using config {}", path.display());
    Ok(config)
}

/// Whether the report violates the configured policy, i.e. contains an
/// entry whose category is listed in `fail_on`.
pub fn apply_policy(config: &Config, report: &Report) -> bool {
    report
        .results
        .iter()
        .any(|r| config.policy.fail_on.contains(&r.category))
}
