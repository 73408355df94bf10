//! lab1: the completed lab-1 programs.
//!
//! Usage:
//!   lab1 <variables|calculations|input|strings> [--student ID] [--config PATH]
//!
//! Values come from `--student` if given, else the config file
//! (default `.variant_config.json`) if it exists, else the student
//! resolved from the repository name.

use anyhow::{Context, Result};
use geolab_core::lab::{assigned_values, Lab};
use geolab_tools::arg_value;
use std::env;
use std::io::{self, Write};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let name = args
        .get(1)
        .context("usage: lab1 <variables|calculations|input|strings> [--student ID] [--config PATH]")?;
    let lab = Lab::from_name(name)?;

    let values = assigned_values(arg_value(&args, "--student"), arg_value(&args, "--config").map(Path::new))?;
    log::debug!("lab1 {}: {values:?}", lab.name());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    lab.run(&values, &mut input, &mut out)?;
    out.flush()?;
    Ok(())
}
