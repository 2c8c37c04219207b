// src/planner/mod.rs

use crate::error::Result;
use crate::registry::StrategyRegistry;
use crate::report::UsageReport;
use crate::strategy::WorkoutStrategy;
use std::io::Write;
use tracing::debug;

/// Context that delegates plan generation to the active strategy.
///
/// Borrows its strategy; the caller owns every strategy instance. A planner
/// always has exactly one active strategy.
pub struct WorkoutPlanner<'a> {
    strategy: &'a dyn WorkoutStrategy,
}

impl<'a> WorkoutPlanner<'a> {
    pub fn new(strategy: &'a dyn WorkoutStrategy) -> Self {
        debug!(strategy = strategy.name(), "planner created");
        Self { strategy }
    }

    /// Replaces the active strategy. Counters are untouched.
    pub fn set_strategy(&mut self, strategy: &'a dyn WorkoutStrategy) {
        debug!(from = self.strategy.name(), to = strategy.name(), "switching strategy");
        self.strategy = strategy;
    }

    pub fn active_strategy(&self) -> &'a dyn WorkoutStrategy {
        self.strategy
    }

    pub fn workout_plan(&self) -> String {
        let plan = self.strategy.workout_plan();
        debug!(
            strategy = self.strategy.name(),
            count = self.strategy.usage_count(),
            "plan generated"
        );
        plan
    }

    /// Prints the usage count of every registered strategy to stdout.
    pub fn display_usage_statistics(registry: &StrategyRegistry<'_>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Self::write_usage_statistics(&mut out, registry)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_usage_statistics<W: Write>(out: &mut W, registry: &StrategyRegistry<'_>) -> Result<()> {
        let report = UsageReport::collect(registry);
        debug!(strategies = report.entries.len(), total = report.total(), "writing usage statistics");
        report.write_text(out)
    }
}
