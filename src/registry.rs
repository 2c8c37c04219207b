// src/registry.rs

use crate::error::{PlannerError, Result};
use crate::strategy::WorkoutStrategy;

/// Name → strategy mapping assembled by the driver for reporting.
///
/// Holds references to the same instances the planner switches among.
/// Iterates in insertion order.
#[derive(Default)]
pub struct StrategyRegistry<'a> {
    entries: Vec<(String, &'a dyn WorkoutStrategy)>,
}

impl<'a> StrategyRegistry<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a strategy under `name`. Names must be unique.
    pub fn register(mut self, name: &str, strategy: &'a dyn WorkoutStrategy) -> Result<Self> {
        if self.contains(name) {
            return Err(PlannerError::DuplicateStrategy(name.into()));
        }
        self.entries.push((name.into(), strategy));
        Ok(self)
    }

    /// Registers a strategy under its own `name()`.
    pub fn register_strategy(self, strategy: &'a dyn WorkoutStrategy) -> Result<Self> {
        let name = strategy.name().to_string();
        self.register(&name, strategy)
    }

    pub fn get(&self, name: &str) -> Option<&'a dyn WorkoutStrategy> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, strategy)| *strategy)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a dyn WorkoutStrategy)> + '_ {
        self.entries
            .iter()
            .map(|(name, strategy)| (name.as_str(), *strategy))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
