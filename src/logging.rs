//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log4rs config file, read when present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise logging.
///
/// `verbose` forces debug level on stderr. Otherwise [`LOG_CONFIG_FILE`] is
/// used if it exists, else warnings and errors go to stderr.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    if !verbose && Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log4rs::init_config(stderr_config(level)?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
