// src/console.rs

use crate::error::Result;
use crate::strategy::StrategySpec;
use colored::Colorize;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::io::{IsTerminal, Write};

pub const TITLE: &str = "==== FITNESS WORKOUT PLANNER ====";
pub const EXIT_PROMPT: &str = "Press any key to exit...";

pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", TITLE.bold().cyan())?;
    writeln!(out, "Using the Strategy Pattern to provide different workout plans")?;
    writeln!(out, "Constraint: Must show usage count for each strategy")?;
    Ok(())
}

pub fn write_strategy_list<W: Write>(out: &mut W, specs: &[StrategySpec]) -> Result<()> {
    for spec in specs {
        writeln!(out, "{}", spec.name.bold())?;
        writeln!(out, "  {}", spec.description)?;
        if !spec.tags.is_empty() {
            writeln!(out, "  tags: {}", spec.tags.join(", "))?;
        }
    }
    Ok(())
}

/// Prints the exit prompt and blocks until a key is pressed.
///
/// Returns immediately after the prompt when stdin is not a terminal.
pub fn pause_for_keypress<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", EXIT_PROMPT)?;
    out.flush()?;

    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    terminal::enable_raw_mode()?;
    let read = wait_for_key();
    terminal::disable_raw_mode()?;
    read
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
