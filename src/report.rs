// src/report.rs

use crate::error::Result;
use crate::registry::StrategyRegistry;
use serde::Serialize;
use std::io::Write;

pub const REPORT_HEADER: &str = "--- Workout Strategy Usage Statistics ---";
pub const REPORT_FOOTER: &str = "--------------------------------------";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageEntry {
    pub name: String,
    pub count: u32,
}

/// Point-in-time copy of every registered strategy's usage count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageReport {
    pub entries: Vec<UsageEntry>,
}

impl UsageReport {
    /// Reads counters only; nothing is incremented.
    pub fn collect(registry: &StrategyRegistry<'_>) -> Self {
        Self {
            entries: registry
                .iter()
                .map(|(name, strategy)| UsageEntry {
                    name: name.to_string(),
                    count: strategy.usage_count(),
                })
                .collect(),
        }
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", REPORT_HEADER)?;
        for entry in &self.entries {
            writeln!(out, "{}: Used {} times", entry.name, entry.count)?;
        }
        writeln!(out, "{}", REPORT_FOOTER)?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
