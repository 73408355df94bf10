//! Completed lab-1 programs.
//!
//! Each lab writes human-readable lines to `out`. Only sample entry reads
//! from `input`. Floats are rendered with `variant::format_decimal` unless
//! a lab prints to a fixed precision.

pub mod calculations;
pub mod sample_entry;
pub mod strings;
pub mod variables;

use crate::{
    config::{AssignedValues, VARIANT_CONFIG_FILE},
    error::{LabError, LabResult},
    identity::my_variant,
    variant::variant_for_student,
};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Lab {
    Variables,
    Calculations,
    SampleEntry,
    Strings,
}

impl Lab {
    pub const ALL: [Lab; 4] = [Lab::Variables, Lab::Calculations, Lab::SampleEntry, Lab::Strings];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Variables    => "variables",
            Self::Calculations => "calculations",
            Self::SampleEntry  => "input",
            Self::Strings      => "strings",
        }
    }

    pub fn from_name(name: &str) -> LabResult<Self> {
        Self::ALL
            .into_iter()
            .find(|lab| lab.name() == name)
            .ok_or_else(|| LabError::UnknownLab { name: name.to_string() })
    }

    pub fn run(&self, values: &AssignedValues, input: &mut dyn BufRead, out: &mut dyn Write) -> LabResult<()> {
        match self {
            Self::Variables    => variables::run(values, out),
            Self::Calculations => calculations::run(values, out),
            Self::SampleEntry  => sample_entry::run(input, out),
            Self::Strings      => strings::run(values, out),
        }
    }
}

/// Values a lab runs with: the named student's variant, else the
/// config file if it exists, else the current checkout's variant.
pub fn assigned_values(student: Option<&str>, config: Option<&Path>) -> LabResult<AssignedValues> {
    if let Some(student) = student {
        return Ok(AssignedValues::from(&variant_for_student(student)));
    }
    let config = config.unwrap_or_else(|| Path::new(VARIANT_CONFIG_FILE));
    if config.exists() {
        return AssignedValues::load(config);
    }
    Ok(AssignedValues::from(&my_variant()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_names_round_trip() {
        for lab in Lab::ALL {
            assert_eq!(Lab::from_name(lab.name()).expect("known lab"), lab);
        }
    }

    #[test]
    fn unknown_lab_is_an_error() {
        assert!(matches!(Lab::from_name("setup"), Err(LabError::UnknownLab { .. })));
    }

    #[test]
    fn named_student_wins_over_config() {
        let values = assigned_values(Some("alice"), Some(Path::new("/nonexistent/.variant_config.json")))
            .expect("values");
        assert_eq!(values, AssignedValues::from(&variant_for_student("alice")));
    }
}
