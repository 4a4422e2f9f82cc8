//! Modes command implementation
//!
//! Lists the mode families and their interval patterns.

use anyhow::Result;
use colored::Colorize;
use gongdiao_theory::{IntervalPattern, ModeFamily};
use serde::Serialize;
use std::process::ExitCode;

/// One mode family in the JSON listing.
#[derive(Debug, Serialize)]
pub struct ModeEntry {
    pub name: &'static str,
    pub hanzi: &'static str,
    pub pattern: IntervalPattern,
}

pub fn list() -> Vec<ModeEntry> {
    ModeFamily::ALL
        .iter()
        .map(|&mode| ModeEntry {
            name: mode.name(),
            hanzi: mode.hanzi(),
            pattern: mode.pattern(),
        })
        .collect()
}

/// Run the modes command
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = list();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Mode families".cyan().bold());
    for entry in &entries {
        println!(
            "  {} {:<8} {:<4} {}",
            "->".green(),
            entry.name,
            entry.hanzi,
            entry.pattern
        );
    }

    Ok(ExitCode::SUCCESS)
}
