//! Config file loading

use crate::domain::{Config, OutputFormat};
use anyhow::{Context, Result};
use figment::providers::Env;
use figment::{Figment, Provider};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override file settings,
/// e.g. `SMS_SEGMENTS_OPT_OUT_LEN=24`.
pub const ENV_PREFIX: &str = "SMS_SEGMENTS_";

/// Section name honored when the settings are nested inside a larger file.
const SECTION: &str = "sms-segments";

pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let from_file = load_file_config(dir, config_path)?;
    apply_env(from_file)
}

/// Settings present in the environment layer; absent keys leave the file
/// value alone.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    opt_out_len: Option<usize>,
    opt_out_text: Option<String>,
    output: Option<OutputFormat>,
}

fn apply_env(base: Config) -> Result<Config> {
    apply_overrides(base, Env::prefixed(ENV_PREFIX))
}

fn apply_overrides(mut cfg: Config, layer: impl Provider) -> Result<Config> {
    let overrides: ConfigOverrides = Figment::from(layer)
        .extract()
        .context("Invalid configuration in environment")?;

    if let Some(len) = overrides.opt_out_len {
        cfg.opt_out_len = len;
    }
    match overrides.opt_out_text {
        Some(text) => cfg.opt_out_text = Some(text),
        // A bare length outranks text set by a lower layer.
        None if overrides.opt_out_len.is_some() => cfg.opt_out_text = None,
        None => {}
    }
    if let Some(output) = overrides.output {
        cfg.output = output;
    }
    Ok(cfg)
}

fn load_file_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered files never fail the run.
            tracing::warn!("Failed to parse auto-discovered config {}: {:#}", config_file.display(), e);
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested [sms-segments] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested sms-segments section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty file parses as null.
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "sms-segments.toml",
        ".sms-segments.toml",
        "sms-segments.yml",
        ".sms-segments.yml",
        "sms-segments.yaml",
        ".sms-segments.yaml",
    ];

    candidates.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
