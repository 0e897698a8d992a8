//! Scenario runner: scripted actions against a world, then state verification

pub mod actions;
pub mod definition;
pub mod executor;
pub mod results;
pub mod verification;

pub use actions::ScenarioAction;
pub use definition::ScenarioDefinition;
pub use executor::{ScenarioExecutor, ScenarioExecutorConfig};
pub use results::{ExecutionReport, PerformanceMetrics};
pub use verification::{Region, VerificationCondition, VerificationResult};
