//! Scenario definition and RON file loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::actions::ScenarioAction;
use super::verification::VerificationCondition;

/// Top-level scenario definition loaded from RON files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// Scenario name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// RNG seed for every tick of the run
    #[serde(default)]
    pub seed: u64,

    /// Grid size override, `(width, height)`
    #[serde(default)]
    pub grid: Option<(u32, u32)>,

    /// Initial setup actions (run before main scenario)
    #[serde(default)]
    pub setup: Vec<ScenarioAction>,

    /// Main scenario actions
    pub actions: Vec<ScenarioAction>,

    /// Verification checks to run after scenario
    #[serde(default)]
    pub verify: Vec<VerificationCondition>,
}

impl ScenarioDefinition {
    /// Load scenario from RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

        Self::from_ron(&content)
            .with_context(|| format!("Failed to parse RON scenario: {}", path.display()))
    }

    pub fn from_ron(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Save scenario to RON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize scenario to RON")?;

        std::fs::write(path.as_ref(), ron).with_context(|| {
            format!("Failed to write scenario file: {}", path.as_ref().display())
        })?;

        Ok(())
    }
}
