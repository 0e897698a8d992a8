//! Host configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `sandpit.ron` file (if exists)
//! 3. Environment variables prefixed with `SANDPIT_`
//!
//! Example environment variable: `SANDPIT_SIM__FIRE__BURN_OUT_CHANCE=0.1`

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use sandpit_core::SimConfig;
use serde::{Deserialize, Serialize};

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SandpitConfig {
    /// Everything handed to the core
    #[serde(default)]
    pub sim: SimConfig,

    #[serde(default)]
    pub run: RunConfig,
}

/// Free-run settings, used when no scenario is given
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Ticks to simulate
    pub ticks: u64,
    /// RNG seed for the tick loop
    pub seed: u64,
    /// Log a progress line every N ticks (0 disables)
    pub progress_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            seed: 0,
            progress_interval: 100,
        }
    }
}

impl SandpitConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `sandpit.ron` file (if exists)
    /// 3. Environment variables prefixed with `SANDPIT_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from("sandpit")
    }

    /// Same layering with a different config file name (extension optional)
    pub fn load_from(file_name: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("run.ticks", 600_i64)?
            .set_default("run.seed", 0_i64)?
            .set_default("run.progress_interval", 100_i64)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file_name)
                    .format(FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (SANDPIT_RUN__TICKS, etc.)
            .add_source(Environment::with_prefix("SANDPIT").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config
            .sim
            .validate()
            .context("Invalid simulation configuration")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SandpitConfig::default();
        assert_eq!(config.sim.grid.width, 180);
        assert_eq!(config.run.ticks, 600);
        assert_eq!(config.run.progress_interval, 100);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = SandpitConfig::load_from("no-such-sandpit-config").expect("Failed to load config");
        assert_eq!(config.run.ticks, 600);
        assert_eq!(config.sim.fire.ignite_up, 0.15);
    }
}
