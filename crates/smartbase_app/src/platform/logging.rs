//! Platform logging initialization for smartbase_app.
//!
//! Writes logs to `./smartbase.log` in the current working directory unless
//! the config asks for terminal output.

use std::path::Path;

use log::LevelFilter;
use smartbase_logging::LogDestination;

const LOG_FILENAME: &str = "./smartbase.log";

pub fn initialize(destination: LogDestination) {
    smartbase_logging::initialize(destination, LevelFilter::Info, Path::new(LOG_FILENAME));
}
