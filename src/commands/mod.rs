//! CLI commands for lodestar

pub mod dispatch;
pub mod info;
pub mod ordering;
pub mod shortest;
pub mod spanning;

use lodestar_core::error::Result;
use lodestar_core::graph::UNREACHABLE;

use crate::cli::OutputFormat;

/// Rendering settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub quiet: bool,
    /// Decimal places for distances and weights
    pub precision: usize,
}

impl Output {
    /// Render a distance or weight; +inf reads as "unreachable"
    pub fn number(&self, value: f64) -> String {
        if value == UNREACHABLE {
            "unreachable".to_string()
        } else {
            format!("{:.*}", self.precision, value)
        }
    }

    /// Print a header line unless --quiet
    pub fn header(&self, line: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", line);
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// JSON distance: finite numbers as-is, unreachable as null
pub fn json_distance(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
