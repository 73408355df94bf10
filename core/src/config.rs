//! Course constants and the optional assigned-values file.

use crate::{
    error::LabResult,
    types::GroupId,
    variant::{RockType, Variant},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ASSIGNMENT_ID: &str = "lab01";
pub const SEED_SALT: &str = "GGY3061_2026";
pub const NUM_GROUPS: GroupId = 10;

/// Repository-relative path of the assigned-values file.
pub const VARIANT_CONFIG_FILE: &str = ".variant_config.json";

/// Whether students are bucketed into groups or treated individually.
/// Parameters are drawn the same way under both strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VariantStrategy {
    Grouped,
    Unique,
}

/// Fixed per-assignment configuration. Must match across every
/// consumer of a given assignment or students see different values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentConfig {
    pub assignment_id: String,
    pub seed_salt:     String,
    pub strategy:      VariantStrategy,
    pub num_groups:    GroupId,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            assignment_id: ASSIGNMENT_ID.to_string(),
            seed_salt:     SEED_SALT.to_string(),
            strategy:      VariantStrategy::Grouped,
            num_groups:    NUM_GROUPS,
        }
    }
}

/// The five values a lab runs with and its output is checked against.
/// `rock_type` is free-form; `checks::check_expected_ranges` reports
/// values outside the fixed table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignedValues {
    pub sample_depth:  i64,
    pub sample_mass:   f64,
    pub sample_volume: f64,
    pub rock_type:     String,
    pub grade_value:   f64,
}

#[derive(Debug, Clone, Deserialize)]
struct VariantConfigFile {
    parameters: AssignedValues,
}

impl Default for AssignedValues {
    /// Values used when no `.variant_config.json` is present.
    fn default() -> Self {
        Self {
            sample_depth:  250,
            sample_mass:   15.5,
            sample_volume: 5.2,
            rock_type:     RockType::Granite.to_string(),
            grade_value:   2.45,
        }
    }
}

impl AssignedValues {
    /// A valid parameter set distinct from both the defaults and the
    /// starter-code placeholders.
    pub fn alternative() -> Self {
        Self {
            sample_depth:  375,
            sample_mass:   19.3,
            sample_volume: 6.1,
            rock_type:     RockType::Schist.to_string(),
            grade_value:   3.78,
        }
    }

    /// Load `<repo_root>/.variant_config.json`, or the defaults if the
    /// file does not exist. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load_or_default(repo_root: &Path) -> LabResult<Self> {
        let path = repo_root.join(VARIANT_CONFIG_FILE);
        if !path.exists() {
            log::info!("no {} under {}, using defaults", VARIANT_CONFIG_FILE, repo_root.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn load(path: &Path) -> LabResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: VariantConfigFile = serde_json::from_str(&content)?;
        log::info!("assigned values loaded from {}", path.display());
        Ok(file.parameters)
    }
}

impl From<&Variant> for AssignedValues {
    fn from(variant: &Variant) -> Self {
        let p = &variant.parameters;
        Self {
            sample_depth:  i64::from(p.sample_depth),
            sample_mass:   p.sample_mass,
            sample_volume: p.sample_volume,
            rock_type:     p.rock_type.to_string(),
            grade_value:   p.grade_value,
        }
    }
}
