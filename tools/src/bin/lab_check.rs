//! lab-check: run the hidden checks against the lab1 programs.
//!
//! Usage:
//!   lab-check [--lab1 PATH] [--root DIR] [--student ID] [--json]
//!
//! Expected values are the named student's variant, or the repository's
//! `.variant_config.json`, or the variant of the student this checkout
//! belongs to. `lab1` is always pointed at the same source. Exits non-zero
//! if any check fails.

use anyhow::{Context, Result};
use geolab_core::{
    checks::HiddenSuite,
    config::{AssignedValues, VARIANT_CONFIG_FILE},
    identity::my_username,
    variant::variant_for_student,
};
use geolab_tools::{arg_value, has_flag};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let root = Path::new(arg_value(&args, "--root").unwrap_or("."));
    let lab1 = match arg_value(&args, "--lab1") {
        Some(path) => PathBuf::from(path),
        None => sibling_binary("lab1")?,
    };

    let config = root.join(VARIANT_CONFIG_FILE);
    let (expected, extra_args) = match arg_value(&args, "--student") {
        Some(student) => student_values(student),
        None if config.exists() => (
            AssignedValues::load(&config)?,
            vec!["--config".to_string(), config.display().to_string()],
        ),
        None => student_values(&my_username()),
    };

    log::info!("checking {} against {expected:?}", lab1.display());
    let report = HiddenSuite::new(lab1, expected).with_args(extra_args).run()?;

    if has_flag(&args, "--json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &report.results {
            let status = if result.passed() { "PASS" } else { "FAIL" };
            println!("{status}  {}", result.scenario);
            for failure in &result.failures {
                println!("      {failure}");
            }
        }
    }

    Ok(if report.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn student_values(student: &str) -> (AssignedValues, Vec<String>) {
    (
        AssignedValues::from(&variant_for_student(student)),
        vec!["--student".to_string(), student.to_string()],
    )
}

/// `name` next to the running executable.
fn sibling_binary(name: &str) -> Result<PathBuf> {
    let exe = env::current_exe().context("cannot locate lab-check executable")?;
    let dir = exe.parent().context("lab-check executable has no parent directory")?;
    Ok(dir.join(format!("{name}{}", env::consts::EXE_SUFFIX)))
}
