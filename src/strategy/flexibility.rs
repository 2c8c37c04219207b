// src/strategy/flexibility.rs

use crate::strategy::{StrategySpec, UsageCounter, WorkoutStrategy};

const PLAN: &str = "Flexibility Training Plan:\n\
- Dynamic stretching: 5 minutes\n\
- Yoga sequence: 20 minutes\n\
- Static stretching: 10 minutes\n\
- Foam rolling: 5 minutes";

/// Stretching and mobility work.
#[derive(Debug, Default)]
pub struct FlexibilityStrategy {
    usage: UsageCounter,
}

impl FlexibilityStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutStrategy for FlexibilityStrategy {
    fn name(&self) -> &str {
        "Flexibility Training"
    }

    fn description(&self) -> &str {
        "Stretching and mobility to improve range of motion."
    }

    fn workout_plan(&self) -> String {
        self.increment_usage();
        PLAN.to_string()
    }

    fn usage_count(&self) -> u32 {
        self.usage.get()
    }

    fn increment_usage(&self) {
        self.usage.increment();
    }

    fn spec(&self) -> StrategySpec {
        StrategySpec {
            name: self.name().into(),
            description: self.description().into(),
            tags: vec!["mobility".into(), "recovery".into()],
        }
    }
}
