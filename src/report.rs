use chrono::{DateTime, Local};
use crate::models::forecast::DayRecord;

/// Composes the plain text visibility report, one block per surviving day.
///
/// Returns None when no day is left after filtering, which signals
/// "insufficient data" rather than an error. The caller decides whether an
/// empty forecast is worth mentioning to anyone.
///
/// # Arguments
///
/// * 'days' - the merged per day records in chronological order
/// * 'max_cloudiness' - the cloudiness threshold used, shown in the header
/// * 'generated_at' - report generation time, shown in the header
pub fn compose_report(
    days: &[DayRecord],
    max_cloudiness: u8,
    generated_at: DateTime<Local>,
) -> Option<String> {
    if days.is_empty() {
        return None;
    }

    let mut report = String::new();
    report.push_str("🔭 Astronomical visibility forecast\n");
    report.push_str(&format!("Generated {}\n", generated_at.format("%d.%m.%Y %H:%M:%S")));
    report.push_str(&format!("Hours with cloud cover of at most {}%\n\n", max_cloudiness));

    for day in days {
        report.push_str(&day.to_string());
        report.push('\n');
    }

    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use crate::moon::MoonPhase;

    fn record() -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(2001, 12, 6).unwrap(),
            sunset: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            moon_illumination: 19.0,
            moon_phase: MoonPhase::WaxingCrescent,
            hours: vec![(NaiveTime::from_hms_opt(22, 0, 0).unwrap(), 40)],
        }
    }

    #[test]
    fn test_no_report_without_days() {
        assert_eq!(compose_report(&[], 50, Local::now()), None);
    }

    #[test]
    fn test_report_contains_day_block() {
        let report = compose_report(&[record()], 50, Local::now()).unwrap();

        assert!(report.contains("cloud cover of at most 50%"));
        assert!(report.contains("📅 2001-12-06"));
        assert!(report.contains("🌇 Sunset: 18:00"));
        assert!(report.contains("🌙 Moon illumination at midnight: 19%"));
        assert!(report.contains("Waxing crescent 🌒"));
        assert!(report.contains("22:00  40%"));
    }
}
