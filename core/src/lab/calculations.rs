//! Density, drilling interval, average depth, core volume.

use crate::{config::AssignedValues, error::LabResult};
use std::f64::consts::PI;
use std::io::Write;

/// Top of the drilled interval (m).
pub const DEPTH_START: i64 = 100;
/// Drill core radius (m).
pub const CORE_RADIUS: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct CoreCalculations {
    /// kg/m3
    pub density:       f64,
    /// m
    pub interval:      i64,
    /// m
    pub average_depth: f64,
    /// m3
    pub core_volume:   f64,
}

impl CoreCalculations {
    pub fn compute(values: &AssignedValues) -> Self {
        let depth_end = values.sample_depth;
        let interval = depth_end - DEPTH_START;
        Self {
            density: values.sample_mass / values.sample_volume,
            interval,
            average_depth: (DEPTH_START + depth_end) as f64 / 2.0,
            core_volume: PI * CORE_RADIUS.powi(2) * interval as f64,
        }
    }
}

pub fn run(values: &AssignedValues, out: &mut dyn Write) -> LabResult<()> {
    let calc = CoreCalculations::compute(values);
    writeln!(out, "Density: {:.2} kg/m3", calc.density)?;
    writeln!(out, "Drilling interval: {} meters", calc.interval)?;
    writeln!(out, "Average depth: {:.1} meters", calc.average_depth)?;
    writeln!(out, "Core volume: {:.4} cubic meters", calc.core_volume)?;
    Ok(())
}
