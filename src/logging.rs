//! log4rs set-up.
//!
//! A `log4rs.yml` in the working directory wins. Without one, or when it
//! does not load, warnings and errors go to stderr and `PG2CIDR_LOG` picks
//! a different level.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
pub const LOG_LEVEL_ENV: &str = "PG2CIDR_LOG";

pub fn init() -> Result<(), Box<dyn Error>> {
    let level = level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let (config, ignored) = config_for(Path::new(LOG_CONFIG_FILE), level)?;
    log4rs::init_config(config)?;
    if let Some(reason) = ignored {
        log::warn!("{reason}");
    }
    Ok(())
}

/// Pick the logging config for `path`.
///
/// Falls back to the stderr config when the file is missing or does not
/// load; the second value then says why the file was skipped.
pub fn config_for(
    path: &Path,
    level: LevelFilter,
) -> Result<(Config, Option<String>), Box<dyn Error>> {
    if !path.exists() {
        return Ok((stderr_config(level)?, None));
    }
    match log4rs::config::load_config_file(path, Default::default()) {
        Ok(config) => Ok((config, None)),
        Err(e) => {
            let reason = format!("Ignoring {}, logging to stderr: {e}", path.display());
            Ok((stderr_config(level)?, Some(reason)))
        }
    }
}

/// Parse a level name, falling back to `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l}: {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
