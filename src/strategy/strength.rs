// src/strategy/strength.rs

use crate::strategy::{StrategySpec, UsageCounter, WorkoutStrategy};

const PLAN: &str = "Strength Training Plan:\n\
- Bench Press: 3 sets x 8 reps\n\
- Squats: 4 sets x 6 reps\n\
- Deadlifts: 3 sets x 6 reps\n\
- Pull-ups: 3 sets x 10 reps\n\
- Military Press: 3 sets x 8 reps";

/// Resistance work to build muscle and strength.
#[derive(Debug, Default)]
pub struct StrengthTrainingStrategy {
    usage: UsageCounter,
}

impl StrengthTrainingStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutStrategy for StrengthTrainingStrategy {
    fn name(&self) -> &str {
        "Strength Training"
    }

    fn description(&self) -> &str {
        "Compound lifts for muscle and strength."
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
            tags: vec!["strength".into(), "resistance".into()],
        }
    }
}
