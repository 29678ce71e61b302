pub mod errors;

use std::time::Duration;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::info;
use ureq::Agent;
use crate::config::{GeoRef, MeteoblueParameters};
use crate::manager_meteoblue::errors::MeteoblueError;
use crate::models::forecast::{DailyAstroFact, HourlyObservation};
use crate::models::meteoblue::{CloudForecast, SunMoonForecast};

const METEOBLUE_DOMAIN: &str = "http://my.meteoblue.com";

/// Struct for managing forecasts fetched from the meteoblue packages API
pub struct Meteoblue {
    agent: Agent,
    api_key: String,
    timezone: String,
    forecast_days: u8,
    lat: f64,
    long: f64,
}

impl Meteoblue {
    /// Returns a Meteoblue struct ready for fetching forecast packages
    ///
    /// # Arguments
    ///
    /// * 'parameters' - api key, timezone and forecast window from the configuration
    /// * 'geo_ref' - the point to get forecasts for
    pub fn new(parameters: &MeteoblueParameters, geo_ref: &GeoRef) -> Meteoblue {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self {
            agent,
            api_key: parameters.api_key.clone(),
            timezone: parameters.timezone.clone(),
            forecast_days: parameters.forecast_days,
            lat: geo_ref.lat,
            long: geo_ref.long,
        }
    }

    /// Fetches one forecast package with the common query parameters applied
    ///
    /// # Arguments
    ///
    /// * 'package' - name of the meteoblue package, e.g. "clouds-1h"
    /// * 'extra' - additional query parameters for the package
    fn fetch(&self, package: &str, extra: &[(&str, &str)]) -> Result<String, MeteoblueError> {
        let url = format!("{}/packages/{}", METEOBLUE_DOMAIN, package);
        let days = self.forecast_days.to_string();
        let lat = format!("{:0.4}", self.lat);
        let long = format!("{:0.4}", self.long);

        info!("requesting meteoblue package '{}'", package);

        let mut request = self.agent
            .get(&url)
            .query("apikey", &self.api_key)
            .query("tz", &self.timezone)
            .query("forecast_days", &days)
            .query("format", "json")
            .query("lat", &lat)
            .query("lon", &long);

        for (name, value) in extra {
            request = request.query(*name, *value);
        }

        let json = request
            .call()?
            .body_mut()
            .read_to_string()?;

        Ok(json)
    }

    /// Retrieves the hourly cloud cover forecast for the whole requested
    /// window and drops observations for hours of the current day that have
    /// already passed, since they are of no use in the report.
    ///
    /// # Arguments
    ///
    /// * 'now' - the current local time used to drop elapsed hours
    pub fn get_cloud_forecast(
        &self,
        now: DateTime<Local>,
    ) -> Result<Vec<HourlyObservation>, MeteoblueError> {
        let json = self.fetch("clouds-1h", &[("windspeed", "kmh"), ("temperature", "C")])?;

        let forecast: CloudForecast = serde_json::from_str(&json)?;
        let data = forecast.data_1h;

        if data.time.len() != data.totalcloudcover.len() {
            return Err(MeteoblueError(
                "hourly time and cloud cover arrays differ in length".to_string(),
            ));
        }

        let mut observations: Vec<HourlyObservation> = Vec::with_capacity(data.time.len());
        for (timestamp, cloudiness) in data.time.iter().zip(data.totalcloudcover) {
            let date_time = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M")?;
            observations.push(HourlyObservation { date_time, cloudiness });
        }

        let today = now.date_naive();
        let time_now = now.time();
        observations.retain(|o| o.date_time.date() != today || o.date_time.time() > time_now);

        info!("received {} hourly cloud cover observations", observations.len());

        Ok(observations)
    }

    /// Retrieves the daily sun and moon forecast. An unrecognized moon phase
    /// name from the provider is a hard error.
    pub fn get_sun_moon_forecast(&self) -> Result<Vec<DailyAstroFact>, MeteoblueError> {
        let json = self.fetch("sunmoon", &[])?;

        let forecast: SunMoonForecast = serde_json::from_str(&json)?;
        let data = forecast.data_day;

        if data.time.len() != data.sunset.len()
            || data.time.len() != data.moonilluminatedfraction.len()
            || data.time.len() != data.moonphasename.len()
        {
            return Err(MeteoblueError(
                "daily sun and moon arrays differ in length".to_string(),
            ));
        }

        let mut facts: Vec<DailyAstroFact> = Vec::with_capacity(data.time.len());
        for i in 0..data.time.len() {
            facts.push(DailyAstroFact {
                date: NaiveDate::parse_from_str(&data.time[i], "%Y-%m-%d")?,
                sunset: NaiveTime::parse_from_str(&data.sunset[i], "%H:%M")?,
                moon_illumination_midday: data.moonilluminatedfraction[i],
                moon_phase: data.moonphasename[i].parse()?,
            });
        }

        info!("received sun and moon facts for {} days", facts.len());

        Ok(facts)
    }
}
