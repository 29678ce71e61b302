use chrono::NaiveTime;
use crate::errors::ProcessingError;
use crate::models::forecast::{DailyAstroFact, DayClouds, DayRecord, HourlyObservation};
use crate::moon;
use crate::moon::MoonPhase;

/// Checks whether a wall clock time falls inside a range that may wrap
/// across midnight.
///
/// The time is in range if it is at or past the range start, or if it lies
/// in [00:00, range end]. A range whose start is after its end therefore
/// behaves as a wrap, e.g. 22:00 to 03:00.
///
/// # Arguments
///
/// * 'range_from' - start of the range, typically sunset
/// * 'range_to' - end of the range, typically an early morning cutoff
/// * 'timestamp' - the time to check
pub fn is_time_in_range(range_from: NaiveTime, range_to: NaiveTime, timestamp: NaiveTime) -> bool {
    timestamp >= range_from || timestamp <= range_to
}

/// Groups the hourly cloud feed by calendar day.
///
/// Hours keep their feed order within each day and days appear in first seen
/// order, which is chronological since the provider delivers hourly data in
/// order. A repeated (date, time) slot is overwritten, last value wins.
///
/// The hourly feed ends exactly at midnight after the last requested day, so
/// the result carries one trailing boundary day holding only its 00:00 slot.
/// That day is sliced off by [merge], not here, making the output one day
/// longer than the astro fact sequence.
///
/// # Arguments
///
/// * 'observations' - the hourly cloud cover feed, chronologically ordered
pub fn group_by_day(observations: &[HourlyObservation]) -> Vec<DayClouds> {
    let mut days: Vec<DayClouds> = Vec::new();

    for obs in observations {
        let date = obs.date_time.date();
        let time = obs.date_time.time();

        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => match day.hours.iter_mut().find(|(t, _)| *t == time) {
                Some(slot) => slot.1 = obs.cloudiness,
                None => day.hours.push((time, obs.cloudiness)),
            },
            None => days.push(DayClouds { date, hours: vec![(time, obs.cloudiness)] }),
        }
    }

    days
}

/// Merges grouped cloud data with the per day astro facts into the final
/// per day records.
///
/// The fact sequence must be exactly one shorter than the grouped day
/// sequence, the extra day being the trailing midnight boundary produced by
/// [group_by_day]. That invariant is asserted before anything is dropped.
/// Moon illuminations are projected to midnight in one batch up front, then
/// days and facts are paired positionally. Per day, only hours between
/// sunset and the cutoff time with cloudiness at or below the threshold
/// survive; a day with no surviving hours is silently pruned. The trailing
/// boundary day is never paired and falls away.
///
/// # Arguments
///
/// * 'days' - grouped cloud data in chronological order
/// * 'facts' - per day astro facts, positionally aligned with 'days'
/// * 'max_cloudiness' - highest acceptable cloud cover in percent
/// * 'cutoff' - end of the observation window, e.g. 03:00
pub fn merge(
    days: Vec<DayClouds>,
    facts: &[DailyAstroFact],
    max_cloudiness: u8,
    cutoff: NaiveTime,
) -> Result<Vec<DayRecord>, ProcessingError> {
    if facts.len() + 1 != days.len() {
        return Err(ProcessingError::MergeArity { days: days.len(), facts: facts.len() });
    }

    let midday: Vec<f64> = facts.iter().map(|f| f.moon_illumination_midday).collect();
    let phases: Vec<MoonPhase> = facts.iter().map(|f| f.moon_phase).collect();
    let projected = moon::project_batch(&midday, &phases)?;

    let mut records: Vec<DayRecord> = Vec::with_capacity(facts.len());

    // zip stops at the facts, slicing off the trailing boundary day
    for ((day, fact), illumination) in days.into_iter().zip(facts).zip(projected) {
        let hours: Vec<(NaiveTime, u8)> = day
            .hours
            .into_iter()
            .filter(|(time, cloudiness)| {
                is_time_in_range(fact.sunset, cutoff, *time) && *cloudiness <= max_cloudiness
            })
            .collect();

        if hours.is_empty() {
            continue;
        }

        records.push(DayRecord {
            date: day.date,
            sunset: fact.sunset,
            moon_illumination: illumination,
            moon_phase: fact.moon_phase,
            hours,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn observation(date_time: &str, cloudiness: u8) -> HourlyObservation {
        HourlyObservation {
            date_time: NaiveDateTime::parse_from_str(date_time, "%Y-%m-%d %H:%M").unwrap(),
            cloudiness,
        }
    }

    #[test]
    fn test_time_in_wrapping_range() {
        assert!(is_time_in_range(time(16, 0), time(3, 0), time(19, 41)));
        assert!(!is_time_in_range(time(16, 0), time(3, 0), time(10, 0)));
        assert!(is_time_in_range(time(16, 0), time(3, 0), time(0, 30)));
    }

    #[test]
    fn test_time_range_inclusive_ends() {
        assert!(is_time_in_range(time(16, 0), time(3, 0), time(16, 0)));
        assert!(is_time_in_range(time(16, 0), time(3, 0), time(3, 0)));
        assert!(!is_time_in_range(time(16, 0), time(3, 0), time(3, 1)));
    }

    #[test]
    fn test_group_by_day() {
        let grouped = group_by_day(&[
            observation("2001-12-06 15:00", 15),
            observation("2001-12-06 16:00", 25),
        ]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].date, date(2001, 12, 6));
        assert_eq!(grouped[0].hours, vec![(time(15, 0), 15), (time(16, 0), 25)]);
    }

    #[test]
    fn test_group_by_day_trailing_boundary() {
        let grouped = group_by_day(&[
            observation("2001-12-06 22:00", 15),
            observation("2001-12-06 23:00", 25),
            observation("2001-12-07 00:00", 35),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[1].date, date(2001, 12, 7));
        assert_eq!(grouped[1].hours, vec![(time(0, 0), 35)]);
    }

    #[test]
    fn test_group_by_day_last_value_wins() {
        let grouped = group_by_day(&[
            observation("2001-12-06 15:00", 15),
            observation("2001-12-06 15:00", 90),
        ]);

        assert_eq!(grouped[0].hours, vec![(time(15, 0), 90)]);
    }

    fn fact(year: i32, month: u32, day: u32) -> DailyAstroFact {
        DailyAstroFact {
            date: date(year, month, day),
            sunset: time(18, 0),
            moon_illumination_midday: 15.4,
            moon_phase: MoonPhase::WaxingCrescent,
        }
    }

    #[test]
    fn test_merge_filters_and_prunes() {
        // Day 1: one hour survives, one excluded by time range, one by cloudiness.
        // Day 2: all hours fail, the day must be absent. Day 3 is the boundary.
        let days = group_by_day(&[
            observation("2001-12-06 14:00", 10),
            observation("2001-12-06 22:00", 40),
            observation("2001-12-06 23:00", 80),
            observation("2001-12-07 12:00", 20),
            observation("2001-12-08 00:00", 55),
        ]);
        let facts = [fact(2001, 12, 6), fact(2001, 12, 7)];

        let records = merge(days, &facts, 50, time(3, 0)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date(2001, 12, 6));
        assert_eq!(records[0].hours, vec![(time(22, 0), 40)]);
        assert_eq!(records[0].sunset, time(18, 0));
        assert_eq!(records[0].moon_illumination, 19.0);
        assert_eq!(records[0].moon_phase, MoonPhase::WaxingCrescent);
    }

    #[test]
    fn test_merge_checks_arity() {
        let days = group_by_day(&[
            observation("2001-12-06 22:00", 40),
            observation("2001-12-07 00:00", 40),
        ]);
        let facts = [fact(2001, 12, 6), fact(2001, 12, 7)];

        assert_eq!(
            merge(days, &facts, 50, time(3, 0)),
            Err(ProcessingError::MergeArity { days: 2, facts: 2 })
        );
    }

    #[test]
    fn test_merge_keeps_early_morning_hours() {
        let days = group_by_day(&[
            observation("2001-12-06 00:30", 5),
            observation("2001-12-06 12:00", 5),
            observation("2001-12-06 22:00", 5),
            observation("2001-12-07 00:00", 5),
        ]);
        let facts = [fact(2001, 12, 6)];

        let records = merge(days, &facts, 50, time(3, 0)).unwrap();

        assert_eq!(records[0].hours, vec![(time(0, 30), 5), (time(22, 0), 5)]);
    }

    #[test]
    fn test_merge_idempotent() {
        let feed = [
            observation("2001-12-06 19:00", 10),
            observation("2001-12-06 22:00", 40),
            observation("2001-12-07 21:00", 30),
            observation("2001-12-08 00:00", 55),
        ];
        let facts = [fact(2001, 12, 6), fact(2001, 12, 7)];

        let first = merge(group_by_day(&feed), &facts, 50, time(3, 0)).unwrap();
        let second = merge(group_by_day(&feed), &facts, 50, time(3, 0)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_merge_propagates_invalid_percentage() {
        let days = group_by_day(&[
            observation("2001-12-06 22:00", 40),
            observation("2001-12-07 00:00", 40),
        ]);
        let facts = [DailyAstroFact {
            moon_illumination_midday: 120.0,
            ..fact(2001, 12, 6)
        }];

        assert_eq!(
            merge(days, &facts, 50, time(3, 0)),
            Err(ProcessingError::InvalidPercentage(120.0))
        );
    }
}
