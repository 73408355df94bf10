//! Deterministic per-student variants.
//!
//! seed       = first 8 bytes (big-endian) of SHA-256("{assignment}:{salt}:{student}")
//! group      = seed % num_groups
//! parameters = five draws from VariantRng(seed), in this order:
//!   1. sample_depth   int   [150, 450]
//!   2. sample_mass    float [10.0, 25.0]  rounded to 1 dp
//!   3. sample_volume  float [3.0, 8.0]    rounded to 1 dp
//!   4. rock_type      one of RockType::ALL
//!   5. grade_value    float [0.5, 4.5]    rounded to 2 dp
//!
//! NEVER reorder the draws or change a range. Students commit their
//! values; every change silently invalidates all of them.

use crate::{
    config::{AssignmentConfig, VariantStrategy, NUM_GROUPS},
    rng::VariantRng,
    types::{GroupId, Seed, StudentId},
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

pub const DEPTH_RANGE: (u32, u32) = (150, 450);
pub const MASS_RANGE: (f64, f64) = (10.0, 25.0);
pub const VOLUME_RANGE: (f64, f64) = (3.0, 8.0);
pub const GRADE_RANGE: (f64, f64) = (0.5, 4.5);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RockType {
    Granite,
    Basalt,
    Sandstone,
    Schist,
    Gneiss,
}

impl RockType {
    /// Draw table. Order is part of the reproducibility contract.
    pub const ALL: [RockType; 5] = [
        RockType::Granite,
        RockType::Basalt,
        RockType::Sandstone,
        RockType::Schist,
        RockType::Gneiss,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Granite   => "Granite",
            Self::Basalt    => "Basalt",
            Self::Sandstone => "Sandstone",
            Self::Schist    => "Schist",
            Self::Gneiss    => "Gneiss",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for RockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterSet {
    /// metres
    pub sample_depth:  u32,
    /// kg
    pub sample_mass:   f64,
    /// cubic metres
    pub sample_volume: f64,
    pub rock_type:     RockType,
    /// percent
    pub grade_value:   f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub student_id: StudentId,
    #[serde(rename = "variant_seed")]
    pub seed:       Seed,
    /// `None` under `VariantStrategy::Unique`.
    pub group_id:   Option<GroupId>,
    pub parameters: ParameterSet,
}

impl AssignmentConfig {
    pub fn compute_seed(&self, student_id: &str) -> Seed {
        let combined = format!("{}:{}:{}", self.assignment_id, self.seed_salt, student_id);
        let digest = Sha256::digest(combined.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(head)
    }

    /// `None` when `num_groups` is zero.
    pub fn compute_group(&self, seed: Seed) -> Option<GroupId> {
        seed.checked_rem(self.num_groups)
    }

    pub fn variant_for_student(&self, student_id: &str) -> Variant {
        let seed = self.compute_seed(student_id);
        let group_id = match self.strategy {
            VariantStrategy::Grouped => self.compute_group(seed),
            VariantStrategy::Unique => None,
        };
        log::debug!("variant: student={student_id} seed={seed:#018x} group={group_id:?}");
        Variant {
            student_id: student_id.to_string(),
            seed,
            group_id,
            parameters: generate_parameters(seed),
        }
    }
}

/// Seed for `student_id` under the course constants.
pub fn compute_seed(student_id: &str) -> Seed {
    AssignmentConfig::default().compute_seed(student_id)
}

/// Group for `seed` under the course constants.
pub fn compute_group(seed: Seed) -> GroupId {
    seed % NUM_GROUPS
}

pub fn generate_parameters(seed: Seed) -> ParameterSet {
    let mut rng = VariantRng::new(seed);
    let sample_depth = rng.int_inclusive(DEPTH_RANGE.0, DEPTH_RANGE.1);
    let sample_mass = round_to(rng.uniform(MASS_RANGE.0, MASS_RANGE.1), 1);
    let sample_volume = round_to(rng.uniform(VOLUME_RANGE.0, VOLUME_RANGE.1), 1);
    let rock_type = *rng.choose(&RockType::ALL);
    let grade_value = round_to(rng.uniform(GRADE_RANGE.0, GRADE_RANGE.1), 2);
    ParameterSet {
        sample_depth,
        sample_mass,
        sample_volume,
        rock_type,
        grade_value,
    }
}

/// Variant for `student_id` under the course constants.
pub fn variant_for_student(student_id: &str) -> Variant {
    AssignmentConfig::default().variant_for_student(student_id)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Shortest round-trip text for `value`, always with a fractional part
/// (`3.0`, never `3`). Every human-readable output renders floats this way
/// so expected values can be matched verbatim.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
