use std::process;
use anyhow::Result;
use chrono::Local;
use log::{error, info, warn};
use crate::config::Config;
use crate::manager_meteoblue::Meteoblue;
use crate::manager_telegram::Telegram;

mod config;
mod errors;
mod initialization;
mod manager_meteoblue;
mod manager_telegram;
mod models;
mod moon;
mod report;
mod weather;

fn main() {
    let config = match initialization::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Fetches, processes and delivers one visibility report
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn run(config: &Config) -> Result<()> {
    let meteoblue = Meteoblue::new(&config.meteoblue, &config.geo_ref);
    let telegram = Telegram::new(&config.telegram);

    let now = Local::now();
    let observations = meteoblue.get_cloud_forecast(now)?;
    let facts = meteoblue.get_sun_moon_forecast()?;

    let grouped = weather::group_by_day(&observations);
    let records = weather::merge(
        grouped,
        &facts,
        config.filter.max_cloudiness,
        config.filter.cutoff_time,
    )?;

    info!("{} days left after filtering", records.len());

    match report::compose_report(&records, config.filter.max_cloudiness, now) {
        Some(text) => telegram.send_message(text)?,
        None => warn!("report not composed, insufficient data for the requested window"),
    }

    Ok(())
}
