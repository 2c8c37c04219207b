// src/schedule.rs

use crate::error::{PlannerError, Result};
use crate::planner::WorkoutPlanner;
use crate::registry::StrategyRegistry;
use std::io::Write;
use tracing::info;

/// What the driver does with the planner before asking for a day's plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DayAction {
    /// Use whatever strategy is already active.
    Keep,
    /// Switch to a registered strategy for the first time.
    SwitchTo(String),
    /// Return to a strategy used on an earlier day.
    BackTo(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleDay {
    pub day: u32,
    pub action: DayAction,
}

impl ScheduleDay {
    pub fn heading(&self) -> String {
        match &self.action {
            DayAction::Keep => format!("[DAY {}] Your workout plan:", self.day),
            DayAction::SwitchTo(name) => format!("[DAY {}] Switching to {}:", self.day, name),
            DayAction::BackTo(name) => format!("[DAY {}] Back to {}:", self.day, name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub days: Vec<ScheduleDay>,
}

impl Schedule {
    /// Strength, Cardio, Flexibility, Strength, Cardio.
    pub fn five_day() -> Self {
        let actions = [
            DayAction::Keep,
            DayAction::SwitchTo("Cardio Training".into()),
            DayAction::SwitchTo("Flexibility Training".into()),
            DayAction::BackTo("Strength Training".into()),
            DayAction::BackTo("Cardio Training".into()),
        ];
        Self {
            days: actions
                .into_iter()
                .enumerate()
                .map(|(i, action)| ScheduleDay {
                    day: i as u32 + 1,
                    action,
                })
                .collect(),
        }
    }
}

/// Walks the planner through every day, writing each day's section.
pub fn run_schedule<'a, W: Write>(
    out: &mut W,
    planner: &mut WorkoutPlanner<'a>,
    registry: &StrategyRegistry<'a>,
    schedule: &Schedule,
) -> Result<()> {
    for day in &schedule.days {
        match &day.action {
            DayAction::Keep => {}
            DayAction::SwitchTo(name) | DayAction::BackTo(name) => {
                let strategy = registry
                    .get(name)
                    .ok_or_else(|| PlannerError::UnknownStrategy(name.clone()))?;
                planner.set_strategy(strategy);
            }
        }

        info!(day = day.day, strategy = planner.active_strategy().name(), "planning day");
        writeln!(out)?;
        writeln!(out, "{}", day.heading())?;
        writeln!(out, "{}", planner.workout_plan())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{
        CardioStrategy, FlexibilityStrategy, StrengthTrainingStrategy, WorkoutStrategy,
    };

    #[test]
    fn five_day_headings() {
        let headings: Vec<String> = Schedule::five_day().days.iter().map(|d| d.heading()).collect();
        assert_eq!(
            headings,
            vec![
                "[DAY 1] Your workout plan:",
                "[DAY 2] Switching to Cardio Training:",
                "[DAY 3] Switching to Flexibility Training:",
                "[DAY 4] Back to Strength Training:",
                "[DAY 5] Back to Cardio Training:",
            ]
        );
    }

    #[test]
    fn five_day_scenario_counts() {
        let strength = StrengthTrainingStrategy::new();
        let cardio = CardioStrategy::new();
        let flexibility = FlexibilityStrategy::new();
        let registry = StrategyRegistry::new()
            .register_strategy(&strength)
            .and_then(|r| r.register_strategy(&cardio))
            .and_then(|r| r.register_strategy(&flexibility))
            .unwrap();
        let mut planner = WorkoutPlanner::new(&strength);

        let mut buf = Vec::new();
        run_schedule(&mut buf, &mut planner, &registry, &Schedule::five_day()).unwrap();

        assert_eq!(strength.usage_count(), 2);
        assert_eq!(cardio.usage_count(), 2);
        assert_eq!(flexibility.usage_count(), 1);

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\n[DAY 1] Your workout plan:\nStrength Training Plan:\n"));
        assert!(text.contains("\n\n[DAY 3] Switching to Flexibility Training:\nFlexibility Training Plan:\n"));
        assert!(text.ends_with("- 5 minutes cool down\n"));
        assert_eq!(planner.active_strategy().name(), "Cardio Training");
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let strength = StrengthTrainingStrategy::new();
        let registry = StrategyRegistry::new().register_strategy(&strength).unwrap();
        let mut planner = WorkoutPlanner::new(&strength);
        let schedule = Schedule {
            days: vec![ScheduleDay {
                day: 1,
                action: DayAction::SwitchTo("Swimming".into()),
            }],
        };

        let mut buf = Vec::new();
        let err = run_schedule(&mut buf, &mut planner, &registry, &schedule).unwrap_err();

        assert!(matches!(err, PlannerError::UnknownStrategy(name) if name == "Swimming"));
        assert!(buf.is_empty());
        assert_eq!(strength.usage_count(), 0);
    }
}
