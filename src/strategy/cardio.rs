// src/strategy/cardio.rs

use crate::strategy::{StrategySpec, UsageCounter, WorkoutStrategy};

const PLAN: &str = "Cardio Training Plan:\n\
- 5 minutes warm-up jog\n\
- 20 minutes interval running (30 sec sprint, 60 sec jog)\n\
- 10 minutes cycling\n\
- 5 minutes cool down";

#[derive(Debug, Default)]
pub struct CardioStrategy {
    usage: UsageCounter,
}

impl CardioStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutStrategy for CardioStrategy {
    fn name(&self) -> &str {
        "Cardio Training"
    }

    fn description(&self) -> &str {
        "Intervals and steady work to raise the heart rate."
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
            tags: vec!["cardio".into(), "endurance".into()],
        }
    }
}
