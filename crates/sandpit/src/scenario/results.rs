//! Execution results and reporting

use anyhow::{Context, Result};
use sandpit_core::world::TickStats;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::verification::VerificationResult;

/// Performance metrics for a scenario execution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Total wall-clock time (milliseconds)
    pub total_duration_ms: f64,

    /// Setup phase duration (milliseconds)
    pub setup_duration_ms: f64,

    /// Main action phase duration (milliseconds)
    pub action_duration_ms: f64,

    /// Verification phase duration (milliseconds)
    pub verification_duration_ms: f64,

    /// Average time per tick (milliseconds)
    pub avg_tick_time_ms: f64,

    /// Peak tick time (milliseconds)
    pub peak_tick_time_ms: f64,

    /// Number of world updates
    pub tick_count: usize,
}

impl PerformanceMetrics {
    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Total: {:.1}ms | Avg tick: {:.3}ms | Peak: {:.3}ms | Ticks: {}",
            self.total_duration_ms, self.avg_tick_time_ms, self.peak_tick_time_ms, self.tick_count
        )
    }
}

/// Report from scenario execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Scenario name
    pub scenario_name: String,

    /// Timestamp (RFC 3339)
    pub timestamp: String,

    /// Seed the run used
    pub seed: u64,

    /// Overall pass/fail status
    pub passed: bool,

    /// Total ticks executed
    pub ticks_executed: usize,

    /// Number of actions executed
    pub actions_executed: usize,

    /// Non-empty cells when verification ran
    pub active_cells: usize,

    /// Rule events counted over the run
    pub stats: TickStats,

    /// Verification failures (empty if all passed)
    pub verification_failures: Vec<VerificationResult>,

    /// Execution log messages
    pub log: Vec<String>,

    /// Performance metrics (timing, throughput)
    pub performance: PerformanceMetrics,
}

impl ExecutionReport {
    /// Create new execution report
    pub fn new(scenario_name: String, seed: u64) -> Self {
        Self {
            scenario_name,
            timestamp: chrono::Utc::now().to_rfc3339(),
            seed,
            passed: false,
            ticks_executed: 0,
            actions_executed: 0,
            active_cells: 0,
            stats: TickStats::default(),
            verification_failures: Vec::new(),
            log: Vec::new(),
            performance: PerformanceMetrics::default(),
        }
    }

    /// Check if all verifications passed
    pub fn success(&self) -> bool {
        self.verification_failures.is_empty()
    }

    /// Save report to JSON file
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize execution report to JSON")?;

        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path.as_ref(), json).with_context(|| {
            format!(
                "Failed to write execution report: {}",
                path.as_ref().display()
            )
        })?;

        Ok(())
    }

    /// Load report from JSON file
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read report file: {}", path.as_ref().display()))?;

        let report = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON report: {}", path.as_ref().display()))?;

        Ok(report)
    }
}
