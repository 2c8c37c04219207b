// src/strategy/mod.rs

use serde::Serialize;
use std::cell::Cell;

/// Describes a strategy for listings (`--list`).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StrategySpec {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Invocation counter owned by a single strategy.
///
/// Interior-mutable so it can be bumped through the shared references
/// held by both the planner and the registry.
#[derive(Debug, Default)]
pub struct UsageCounter {
    count: Cell<u32>,
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.count.get()
    }

    pub fn increment(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// Trait that defines an interchangeable workout plan behavior.
pub trait WorkoutStrategy {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Returns the fixed plan text and counts the invocation.
    fn workout_plan(&self) -> String;

    fn usage_count(&self) -> u32;
    fn increment_usage(&self);

    fn spec(&self) -> StrategySpec {
        StrategySpec {
            name: self.name().into(),
            description: self.description().into(),
            tags: vec![],
        }
    }
}

pub mod cardio;
pub mod flexibility;
pub mod strength;

pub use cardio::CardioStrategy;
pub use flexibility::FlexibilityStrategy;
pub use strength::StrengthTrainingStrategy;
