//! Scenario execution engine

use std::time::Instant;

use anyhow::{Context, Result, bail};
use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use sandpit_core::entity::InputState;
use sandpit_core::tools::Brush;
use sandpit_core::world::TickStats;
use sandpit_core::{SimConfig, World};

use super::actions::ScenarioAction;
use super::definition::ScenarioDefinition;
use super::results::ExecutionReport;
use super::verification::VerificationCondition;

/// Configuration for scenario executor
#[derive(Debug, Clone, Default)]
pub struct ScenarioExecutorConfig {
    /// Replace the scenario's own seed
    pub seed_override: Option<u64>,

    /// Verbose logging
    pub verbose: bool,
}

/// Executes scenario actions against a world
pub struct ScenarioExecutor {
    /// Configuration
    config: ScenarioExecutorConfig,

    rng: Xoshiro256StarStar,

    stats: TickStats,

    /// Current tick counter
    tick_count: usize,

    /// Action execution log
    log: Vec<String>,

    /// Tick timings (milliseconds)
    tick_times: Vec<f64>,
}

impl ScenarioExecutor {
    /// Create new executor with default config
    pub fn new() -> Self {
        Self::with_config(ScenarioExecutorConfig::default())
    }

    /// Create new executor with custom config
    pub fn with_config(config: ScenarioExecutorConfig) -> Self {
        Self {
            config,
            rng: Xoshiro256StarStar::seed_from_u64(0),
            stats: TickStats::default(),
            tick_count: 0,
            log: Vec::new(),
            tick_times: Vec::new(),
        }
    }

    /// Build the world a scenario asks for, on top of the host's sim config
    pub fn build_world(scenario: &ScenarioDefinition, base: &SimConfig) -> Result<World> {
        let config = match scenario.grid {
            Some((width, height)) => base.clone().resized(width, height),
            None => base.clone(),
        };
        World::new(config)
            .with_context(|| format!("Failed to create world for scenario: {}", scenario.name))
    }

    /// Execute a complete scenario
    pub fn execute_scenario(
        &mut self,
        scenario: &ScenarioDefinition,
        world: &mut World,
    ) -> Result<ExecutionReport> {
        let start_time = Instant::now();
        let seed = self.config.seed_override.unwrap_or(scenario.seed);
        let mut report = ExecutionReport::new(scenario.name.clone(), seed);

        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
        self.stats.reset();
        self.log.clear();
        self.tick_count = 0;
        self.tick_times.clear();

        self.log(&format!("Starting scenario: {}", scenario.name));
        if !scenario.description.is_empty() {
            self.log(&format!("Description: {}", scenario.description));
        }

        // Execute setup actions
        let setup_start = Instant::now();
        if !scenario.setup.is_empty() {
            self.log(&format!("Running {} setup actions", scenario.setup.len()));
            for (idx, action) in scenario.setup.iter().enumerate() {
                if let Err(e) = self.execute_action(action, world) {
                    let msg = format!("Setup action {} failed: {}", idx, e);
                    self.log(&msg);
                    return Err(anyhow::anyhow!(msg));
                }
            }
        }
        report.performance.setup_duration_ms = setup_start.elapsed().as_secs_f64() * 1000.0;

        // Execute main actions
        let action_start = Instant::now();
        self.log(&format!("Running {} main actions", scenario.actions.len()));
        for (idx, action) in scenario.actions.iter().enumerate() {
            if let Err(e) = self.execute_action(action, world) {
                let msg = format!("Action {} failed: {}", idx, e);
                self.log(&msg);
                return Err(anyhow::anyhow!(msg));
            }
        }
        report.performance.action_duration_ms = action_start.elapsed().as_secs_f64() * 1000.0;

        report.actions_executed = scenario.setup.len() + scenario.actions.len();

        // Run verifications
        let verify_start = Instant::now();
        if !scenario.verify.is_empty() {
            self.log(&format!("Running {} verifications", scenario.verify.len()));
            for condition in &scenario.verify {
                let result = condition.evaluate(world);
                self.log(&format!(
                    "  {} {}",
                    if result.passed { "✓" } else { "✗" },
                    result.message
                ));

                if !result.passed {
                    report.verification_failures.push(result);
                }
            }
        }
        report.performance.verification_duration_ms =
            verify_start.elapsed().as_secs_f64() * 1000.0;

        // Finalize report
        report.ticks_executed = self.tick_count;
        report.active_cells = world.active_cell_count();
        report.stats = self.stats;
        report.passed = report.success();

        report.performance.total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
        report.performance.tick_count = self.tick_count;
        if !self.tick_times.is_empty() {
            let total: f64 = self.tick_times.iter().sum();
            report.performance.avg_tick_time_ms = total / self.tick_times.len() as f64;
            report.performance.peak_tick_time_ms =
                self.tick_times.iter().copied().fold(0.0, f64::max);
        }

        self.log(&format!(
            "Scenario complete: {} ({} ticks, {:.1}ms)",
            if report.passed { "PASSED" } else { "FAILED" },
            self.tick_count,
            report.performance.total_duration_ms
        ));
        self.log(&format!("  Performance: {}", report.performance.summary()));
        report.log = self.log.clone();

        Ok(report)
    }

    /// Execute a single action
    fn execute_action(&mut self, action: &ScenarioAction, world: &mut World) -> Result<()> {
        if self.config.verbose {
            self.log(&format!("[Tick {}] {:?}", self.tick_count, action));
        }

        match action {
            ScenarioAction::Paint {
                x,
                y,
                material,
                radius,
            } => {
                let brush = Brush::from(*material);
                let radius = radius.unwrap_or_else(|| world.config().brush.radius_for(brush));
                let written = world.paint(*x, *y, radius, brush);
                self.log(&format!(
                    "  Painted {} at ({}, {}) r={}: {} cells",
                    material, x, y, radius, written
                ));
            }

            ScenarioAction::FillRect {
                min_x,
                min_y,
                max_x,
                max_y,
                material,
            } => {
                let grid = world.grid_mut();
                let mut written = 0;
                for y in *min_y..=*max_y {
                    for x in *min_x..=*max_x {
                        if grid.set(x, y, *material) {
                            written += 1;
                        }
                    }
                }
                self.log(&format!(
                    "  Filled rect ({},{}) to ({},{}) with {}: {} cells",
                    min_x, min_y, max_x, max_y, material, written
                ));
            }

            ScenarioAction::LoadScene { cells, origin } => {
                let report = world.load_scene(cells, *origin);
                self.log(&format!(
                    "  Loaded scene: {} placed, {} substituted, {} skipped",
                    report.placed, report.substituted, report.skipped
                ));
            }

            ScenarioAction::ResetScene => {
                world.reset_scene();
                self.log("  Scene reset");
            }

            ScenarioAction::StartPlay => {
                world.start_play();
                self.log("  Play mode started");
            }

            ScenarioAction::StopPlay => {
                world.stop_play();
                self.log("  Play mode stopped");
            }

            ScenarioAction::SetInput { left, right, jump } => {
                world.set_input(InputState::new(*left, *right, *jump));
            }

            ScenarioAction::TeleportPlayer { x, y } => {
                if !world.teleport_player(Vec2::new(*x, *y)) {
                    bail!("TeleportPlayer requires play mode");
                }
                self.log(&format!("  Teleported player to ({}, {})", x, y));
            }

            ScenarioAction::WaitTicks { ticks } => {
                self.simulate_ticks(world, *ticks);
            }

            ScenarioAction::WaitUntil {
                condition,
                timeout_ticks,
            } => {
                self.wait_until(world, condition, *timeout_ticks)?;
            }

            ScenarioAction::Log { message } => {
                self.log(&format!("  [Scenario] {}", message));
            }
        }

        Ok(())
    }

    /// Wait until condition is met
    fn wait_until(
        &mut self,
        world: &mut World,
        condition: &VerificationCondition,
        timeout_ticks: usize,
    ) -> Result<()> {
        for tick in 0..timeout_ticks {
            let result = condition.evaluate(world);

            if result.passed {
                self.log(&format!(
                    "  Condition met after {} ticks: {}",
                    tick, result.message
                ));
                return Ok(());
            }

            self.simulate_ticks(world, 1);
        }

        let result = condition.evaluate(world);
        if result.passed {
            return Ok(());
        }
        bail!(
            "WaitUntil timed out after {} ticks: {}",
            timeout_ticks,
            result.message
        );
    }

    /// Simulate N ticks
    fn simulate_ticks(&mut self, world: &mut World, ticks: usize) {
        for _ in 0..ticks {
            let tick_start = Instant::now();
            world.update(&mut self.stats, &mut self.rng);
            self.tick_times
                .push(tick_start.elapsed().as_secs_f64() * 1000.0);
            self.tick_count += 1;
        }
    }

    fn log(&mut self, message: &str) {
        log::info!("{}", message);
        self.log.push(message.to_string());
    }
}

impl Default for ScenarioExecutor {
    fn default() -> Self {
        Self::new()
    }
}
