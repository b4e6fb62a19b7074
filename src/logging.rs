//! Logger setup.
//!
//! Uses the log4rs YAML file when present and no `-v` was given. Otherwise
//! logs to stderr with a level picked from the `-v` count.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn stderr_config(level: LevelFilter) -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// A `-v` on the command line overrides the config file.
fn use_config_file(config_file: &Path, verbose: u8) -> bool {
    verbose == 0 && config_file.exists()
}

/// Initialise log4rs from `config_file`, or from the built-in stderr config
/// if that file does not exist or a verbosity was requested.
pub fn init(config_file: &Path, verbose: u8) -> anyhow::Result<()> {
    if use_config_file(config_file, verbose) {
        log4rs::init_file(config_file, Default::default())?;
        log::debug!("Logging configured from {}", config_file.display());
    } else {
        log4rs::init_config(stderr_config(level_for_verbosity(verbose))?)?;
        log::debug!(
            "Logging to stderr at {}, not using {}",
            level_for_verbosity(verbose),
            config_file.display()
        );
    }
    Ok(())
}
