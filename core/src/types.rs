//! Shared primitive types used across the entire crate.

/// A student identifier. Usually the suffix of a classroom repository name.
pub type StudentId = String;

/// A derived 64-bit seed. One seed per (assignment, salt, student).
pub type Seed = u64;

/// A cosmetic variant bucket in `[0, num_groups)`.
pub type GroupId = u64;
