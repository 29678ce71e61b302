use std::fmt;
use std::fmt::Formatter;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crate::moon::MoonPhase;

/// One hourly cloud cover reading from the provider feed
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyObservation {
    pub date_time: NaiveDateTime,
    pub cloudiness: u8,
}

/// Sun and moon facts for one forecast day, positionally aligned
/// with the dates of the hourly cloud feed
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAstroFact {
    pub date: NaiveDate,
    pub sunset: NaiveTime,
    pub moon_illumination_midday: f64,
    pub moon_phase: MoonPhase,
}

/// Hourly cloud cover of one calendar day, hours kept in feed order
#[derive(Debug, Clone, PartialEq)]
pub struct DayClouds {
    pub date: NaiveDate,
    pub hours: Vec<(NaiveTime, u8)>,
}

/// The merged, filtered per day unit of the pipeline.
///
/// 'moon_illumination' is the value projected to midnight, rounded to one
/// decimal. 'hours' holds only the hours that survived the time range and
/// cloudiness filters, in feed order. A record with no surviving hours is
/// never part of the pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub sunset: NaiveTime,
    pub moon_illumination: f64,
    pub moon_phase: MoonPhase,
    pub hours: Vec<(NaiveTime, u8)>,
}

/// Implementation of the Display Trait for the per day report block
impl fmt::Display for DayRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "📅 {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "🌇 Sunset: {}", self.sunset.format("%H:%M"))?;
        writeln!(f, "🌙 Moon illumination at midnight: {}%", self.moon_illumination)?;
        writeln!(f, "{}", self.moon_phase.label())?;
        writeln!(f, "☁ Cloud cover per hour:")?;
        for (time, cloudiness) in &self.hours {
            writeln!(f, "{} {:>3}%", time.format("%H:%M"), cloudiness)?;
        }

        Ok(())
    }
}
