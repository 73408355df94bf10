//! geolab-core: deterministic per-student assignment variants for the
//! GGY3061 earth-sciences labs, the completed lab programs, and the
//! hidden checks that scrape their output.

pub mod checks;
pub mod config;
pub mod error;
pub mod identity;
pub mod lab;
pub mod process;
pub mod rng;
pub mod types;
pub mod variant;
