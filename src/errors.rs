use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Errors raised by the core forecast pipeline
#[derive(Error, Debug, PartialEq)]
pub enum ProcessingError {
    #[error("moon illumination percentage must be between 0 and 100, got {0}")]
    InvalidPercentage(f64),
    #[error("invalid moon phase name: '{0}', please use one of the eight predefined phase names")]
    InvalidPhase(String),
    #[error("grouped day count {days} does not match astro fact count {facts}, expected facts = days - 1")]
    MergeArity { days: usize, facts: usize },
}

#[derive(Error, Debug)]
#[error("error in configuration: {0}")]
pub struct ConfigError(pub String);
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(format!("config file error: {}", e))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(format!("toml document error: {}", e))
    }
}

pub struct InitError(pub String);

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "InitError: {}", self.0)
    }
}
impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError(e.to_string())
    }
}
impl From<std::io::Error> for InitError {
    fn from(e: std::io::Error) -> Self {
        InitError(e.to_string())
    }
}
