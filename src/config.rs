use std::fs;
use chrono::NaiveTime;
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize)]
pub struct MeteoblueParameters {
    pub api_key: String,
    pub timezone: String,
    pub forecast_days: u8,
}

#[derive(Deserialize)]
pub struct FilterParameters {
    pub max_cloudiness: u8,
    #[serde(deserialize_with = "hhmm")]
    pub cutoff_time: NaiveTime,
}

#[derive(Deserialize)]
pub struct TelegramParameters {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub meteoblue: MeteoblueParameters,
    pub filter: FilterParameters,
    pub telegram: TelegramParameters,
    pub general: General,
}

/// Deserializes a 24 hour clock time given as "HH:MM"
fn hhmm<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let time = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&time, "%H:%M").map_err(serde::de::Error::custom)
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates the configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if !(1..=10).contains(&config.meteoblue.forecast_days) {
        return Err(ConfigError::from("forecast_days must be between 1 and 10"));
    }
    if config.filter.max_cloudiness > 100 {
        return Err(ConfigError::from("max_cloudiness must be between 0 and 100"));
    }
    if !(-90.0..=90.0).contains(&config.geo_ref.lat) {
        return Err(ConfigError::from("lat must be between -90 and 90 degrees"));
    }
    if !(-180.0..=180.0).contains(&config.geo_ref.long) {
        return Err(ConfigError::from("long must be between -180 and 180 degrees"));
    }
    if !valid_timezone(&config.meteoblue.timezone) {
        return Err(ConfigError::from("timezone must be given as Region/City, e.g. Europe/Moscow"));
    }

    Ok(config)
}

/// Checks that a timezone is given in the Region/City form the provider expects
///
/// # Arguments
///
/// * 'timezone' - the timezone string from the configuration
fn valid_timezone(timezone: &str) -> bool {
    match timezone.split_once('/') {
        Some((region, city)) => {
            region.chars().next().is_some_and(|c| c.is_ascii_uppercase())
                && city.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        }
        None => false,
    }
}
