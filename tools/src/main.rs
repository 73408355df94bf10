//! get-variant: print a student's assignment values.
//!
//! Usage:
//!   get-variant                  # student resolved from the repository name
//!   get-variant --student alice

use anyhow::Result;
use geolab_core::{
    identity::my_variant,
    variant::{format_decimal, variant_for_student, Variant},
};
use geolab_tools::arg_value;
use std::env;
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let variant = match arg_value(&args, "--student") {
        Some(student) => variant_for_student(student),
        None => my_variant(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_assignment_values(&mut out, &variant)?;
    out.flush()?;
    Ok(())
}

fn print_assignment_values(out: &mut impl Write, variant: &Variant) -> Result<()> {
    let p = &variant.parameters;
    let rule = "=".repeat(60);
    let thin = "-".repeat(40);
    let group = variant
        .group_id
        .map(|g| g.to_string())
        .unwrap_or_else(|| "none".to_string());

    writeln!(out, "{rule}")?;
    writeln!(out, "YOUR ASSIGNMENT VALUES - Lab 1: Python Fundamentals")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "Student: {}", variant.student_id)?;
    writeln!(out, "Variant Group: {group}")?;
    writeln!(out)?;
    writeln!(out, "Use these EXACT values in your code:")?;
    writeln!(out, "{thin}")?;
    writeln!(out, "  sample_depth  = {:<8} # meters (int)", p.sample_depth)?;
    writeln!(out, "  sample_mass   = {:<8} # kg (float)", format_decimal(p.sample_mass))?;
    writeln!(out, "  sample_volume = {:<8} # cubic meters (float)", format_decimal(p.sample_volume))?;
    writeln!(out, "  rock_type     = {:<8} # string", format!("'{}'", p.rock_type))?;
    writeln!(out, "  grade_value   = {:<8} # percentage (float)", format_decimal(p.grade_value))?;
    writeln!(out, "{thin}")?;
    writeln!(out)?;
    writeln!(out, "These values are UNIQUE to you. Using someone else's")?;
    writeln!(out, "values will cause hidden tests to FAIL.")?;
    writeln!(out)?;
    writeln!(out, "JSON format (for reference):")?;
    writeln!(out, "{}", serde_json::to_string_pretty(variant)?)?;
    Ok(())
}
