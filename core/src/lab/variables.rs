//! Variables and their kinds.

use super::strings::SAMPLE_ID;
use crate::{config::AssignedValues, error::LabResult, variant::format_decimal};
use std::io::Write;

pub fn run(values: &AssignedValues, out: &mut dyn Write) -> LabResult<()> {
    let processed = false;

    writeln!(out, "Sample ID: {SAMPLE_ID}, type: str")?;
    writeln!(out, "Depth: {}, type: int", values.sample_depth)?;
    writeln!(out, "Mass: {}, type: float", format_decimal(values.sample_mass))?;
    writeln!(out, "Volume: {}, type: float", format_decimal(values.sample_volume))?;
    writeln!(out, "Grade: {}, type: float", format_decimal(values.grade_value))?;
    writeln!(out, "Rock type: {}, type: str", values.rock_type)?;
    writeln!(out, "Processed: {processed}, type: bool")?;
    Ok(())
}
