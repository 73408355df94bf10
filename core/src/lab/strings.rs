//! String operations over a sample ID and description.

use crate::{config::AssignedValues, error::LabResult};
use std::io::Write;

pub const SAMPLE_ID: &str = "GEO-2024-001";

pub fn run(values: &AssignedValues, out: &mut dyn Write) -> LabResult<()> {
    let description = format!("  High grade {} sample  ", values.rock_type);
    let stripped = description.trim();

    writeln!(out, "Original ID: {SAMPLE_ID}")?;
    writeln!(out, "Lowercase: {}", SAMPLE_ID.to_lowercase())?;
    writeln!(out, "Replace: {}", SAMPLE_ID.replace("GEO", "SAMPLE"))?;
    writeln!(out, "Before strip: \"{description}\"")?;
    writeln!(out, "After strip: \"{stripped}\"")?;
    writeln!(out, "Year from ID: {}", &SAMPLE_ID[4..8])?;
    writeln!(out, "First 3 chars: {}", &SAMPLE_ID[..3])?;
    writeln!(out, "Full name: {SAMPLE_ID} - {stripped}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations() {
        let mut out = Vec::new();
        run(&AssignedValues::default(), &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            [
                "Original ID: GEO-2024-001",
                "Lowercase: geo-2024-001",
                "Replace: SAMPLE-2024-001",
                "Before strip: \"  High grade Granite sample  \"",
                "After strip: \"High grade Granite sample\"",
                "Year from ID: 2024",
                "First 3 chars: GEO",
                "Full name: GEO-2024-001 - High grade Granite sample",
            ]
        );
    }
}
