//! Diagnostic logging setup.
//!
//! Log events go to stderr so they never mix with the report on stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Maps the `--verbose` flag to a level filter.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize the global logger. Calling it twice is harmless; the second
/// call is ignored.
pub fn initialize(verbose: bool) {
    let _ = TermLogger::init(
        level_for(verbose),
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
