use std::env;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config, General};
use crate::errors::InitError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Loads the configuration and sets up logging
///
/// The configuration file path is taken from the CONFIG_PATH environment
/// variable and falls back to ./config.toml
pub fn init() -> Result<Config, InitError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "./config.toml".to_string());

    let config = load_config(&config_path)?;
    setup_logging(&config.general)?;

    info!("clearnight version {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Builds the log4rs configuration with a file appender and, when configured,
/// a console appender
///
/// # Arguments
///
/// * 'general' - the general configuration section
fn setup_logging(general: &General) -> Result<(), InitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        config = config.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = config
        .build(root.build(general.log_level))
        .map_err(|e| InitError(e.to_string()))?;

    log4rs::init_config(log_config).map_err(|e| InitError(e.to_string()))?;

    Ok(())
}
