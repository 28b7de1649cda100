//! Solver configuration: built-in defaults + optional TOML file.
//!
//! - `SolverConfig::default()` → seeds `{-10, -5, 0, 5, 10}`, 100 steps, 1e-6
//! - `SolverConfig::from_toml_file(path)` → load user settings
//! - `SolverConfig::load(cli_path)` → `--config FILE`, else ~/.eqsolve/config.toml
//!   if present, else built-in

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::parser::DEFAULT_MAX_DEGREE;
use crate::core::polynomial_solver::NewtonOptions;
use crate::core::radical::DEFAULT_DECIMAL_PLACES;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub newton: NewtonOptions,
    pub format: FormatOptions,
    pub parser: ParserOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits kept when a value has no exact form.
    pub decimal_places: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { decimal_places: DEFAULT_DECIMAL_PLACES }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub max_degree: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_degree: DEFAULT_MAX_DEGREE }
    }
}

impl SolverConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let cfg: SolverConfig = toml::from_str(txt).context("parsing solver config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("loading {}", path.display()))
    }

    /// An explicit `--config` must load; the per-user default falls back to the
    /// built-in settings with a warning.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(p) = cli_path {
            debug!("loading config from {}", p.display());
            return Self::from_toml_file(p);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => {
                        debug!("loaded config from {}", p.display());
                        return Ok(cfg);
                    }
                    Err(e) => warn!("failed loading {} ({:#}), using built-in settings", p.display(), e),
                }
            }
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.newton.seeds.is_empty() {
            bail!("newton.seeds must not be empty");
        }
        if self.newton.seeds.iter().any(|s| !s.is_finite()) {
            bail!("newton.seeds must be finite numbers");
        }
        if !(self.newton.tolerance > 0.0) {
            bail!("newton.tolerance must be positive");
        }
        if self.newton.max_iterations == 0 {
            bail!("newton.max_iterations must be at least 1");
        }
        if self.format.decimal_places > 15 {
            bail!("format.decimal_places must be at most 15");
        }
        if self.parser.max_degree < 2 {
            bail!("parser.max_degree must be at least 2");
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing solver config")
    }
}

/// ~/.eqsolve/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".eqsolve").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
