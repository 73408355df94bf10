//! Interactive sample entry: four lines on stdin, a summary and a
//! grade classification on stdout.

use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Grades at or above this percentage are economic.
pub const ECONOMIC_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradeClass {
    Economic,
    SubEconomic,
}

impl GradeClass {
    pub fn classify(grade: f64) -> Self {
        if grade >= ECONOMIC_THRESHOLD {
            Self::Economic
        } else {
            Self::SubEconomic
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Economic    => "Economic",
            Self::SubEconomic => "Sub-economic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleEntry {
    pub sample_id: String,
    pub rock_type: String,
    /// percent
    pub grade:     f64,
    /// metres
    pub depth:     i64,
}

impl SampleEntry {
    /// Prompt for and read the four fields in order.
    pub fn read(input: &mut dyn BufRead, out: &mut dyn Write) -> LabResult<Self> {
        let sample_id = prompt(input, out, "Enter sample ID: ", "sample_id")?;
        let rock_type = prompt(input, out, "Enter rock type: ", "rock_type")?;
        let grade_text = prompt(input, out, "Enter grade (%): ", "grade")?;
        let depth_text = prompt(input, out, "Enter depth (m): ", "depth")?;

        let grade = grade_text
            .parse::<f64>()
            .map_err(|_| LabError::InvalidInput { field: "grade", value: grade_text.clone() })?;
        let depth = depth_text
            .parse::<i64>()
            .map_err(|_| LabError::InvalidInput { field: "depth", value: depth_text.clone() })?;

        Ok(Self { sample_id, rock_type, grade, depth })
    }

    pub fn classification(&self) -> GradeClass {
        GradeClass::classify(self.grade)
    }

    pub fn write_summary(&self, out: &mut dyn Write) -> LabResult<()> {
        writeln!(out, "--- Sample Summary ---")?;
        writeln!(out, "Sample ID: {}", self.sample_id)?;
        writeln!(out, "Rock Type: {}", self.rock_type)?;
        writeln!(out, "Grade: {:.2}%", self.grade)?;
        writeln!(out, "Depth: {} meters", self.depth)?;
        writeln!(out, "Classification: {}", self.classification().label())?;
        Ok(())
    }
}

fn prompt(input: &mut dyn BufRead, out: &mut dyn Write, text: &str, field: &'static str) -> LabResult<String> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LabError::MissingInput { field });
    }
    Ok(line.trim().to_string())
}

pub fn run(input: &mut dyn BufRead, out: &mut dyn Write) -> LabResult<()> {
    let entry = SampleEntry::read(input, out)?;
    writeln!(out)?;
    entry.write_summary(out)
}
