pub mod config;
pub mod console;
pub mod error;
pub mod planner;
pub mod registry;
pub mod report;
pub mod schedule;
pub mod strategy;

pub use error::{PlannerError, Result};
pub use planner::WorkoutPlanner;
pub use registry::StrategyRegistry;
pub use strategy::WorkoutStrategy;
