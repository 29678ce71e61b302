use std::f64::consts::PI;
use std::str::FromStr;
use crate::errors::ProcessingError;

/// Synodic month, the period between successive same moon phases, in days
const SYNODIC_MONTH: f64 = 29.53;

/// Midday to midnight as a fraction of a day
const HALF_DAY: f64 = 0.5;

/// Empirical dimming coefficient applied to the projected illumination
const DIMMING: f64 = 0.98;

/// The eight moon phases as reported by the forecast provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl FromStr for MoonPhase {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(MoonPhase::New),
            "waxing crescent" => Ok(MoonPhase::WaxingCrescent),
            "first quarter" => Ok(MoonPhase::FirstQuarter),
            "waxing gibbous" => Ok(MoonPhase::WaxingGibbous),
            "full" => Ok(MoonPhase::Full),
            "waning gibbous" => Ok(MoonPhase::WaningGibbous),
            "last quarter" => Ok(MoonPhase::LastQuarter),
            "waning crescent" => Ok(MoonPhase::WaningCrescent),
            _ => Err(ProcessingError::InvalidPhase(s.to_string())),
        }
    }
}

impl MoonPhase {
    /// True for phases where the illuminated fraction is growing
    fn is_waxing(&self) -> bool {
        matches!(
            self,
            MoonPhase::New
                | MoonPhase::WaxingCrescent
                | MoonPhase::FirstQuarter
                | MoonPhase::WaxingGibbous
        )
    }

    /// Display label used in the rendered report
    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::New => "New moon 🌑",
            MoonPhase::WaxingCrescent => "Waxing crescent 🌒",
            MoonPhase::FirstQuarter => "First quarter 🌓",
            MoonPhase::WaxingGibbous => "Waxing gibbous 🌔",
            MoonPhase::Full => "Full moon 🌕",
            MoonPhase::WaningGibbous => "Waning gibbous 🌖",
            MoonPhase::LastQuarter => "Last quarter 🌗",
            MoonPhase::WaningCrescent => "Waning crescent 🌘",
        }
    }
}

/// Projects a midday moon illumination percentage to the following midnight.
///
/// The illuminated fraction is mapped back to a phase angle on the 0-2π lunar
/// cycle, the angle is advanced by half a day of the synodic month, and the
/// illumination is recovered from the advanced angle. The midday reading anchors
/// the curve, the phase name only selects the waxing or waning half of the cycle.
/// The result is rounded to one decimal.
///
/// # Arguments
///
/// * 'midday_pct' - moon illumination at midday in percent, 0 to 100
/// * 'phase' - the moon phase for the same day
pub fn project_to_midnight(midday_pct: f64, phase: MoonPhase) -> Result<f64, ProcessingError> {
    if !(0.0..=100.0).contains(&midday_pct) {
        return Err(ProcessingError::InvalidPercentage(midday_pct));
    }

    let fraction = midday_pct / 100.0;

    // Clamp before arccos to absorb float rounding at the interval edges
    let cos_theta = (1.0 - 2.0 * fraction).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();

    // arccos only covers the waxing half of the cycle, mirror for waning phases
    let theta_midday = if phase.is_waxing() { theta } else { 2.0 * PI - theta };

    let delta_theta = 2.0 * PI * (HALF_DAY / SYNODIC_MONTH);
    let theta_midnight = (theta_midday + delta_theta).rem_euclid(2.0 * PI);

    let projected = 0.5 * (1.0 - theta_midnight.cos()) * 100.0 * DIMMING;

    Ok((projected * 10.0).round() / 10.0)
}

/// Projects a whole forecast window of midday illumination readings to midnight,
/// one value per day in input order.
///
/// Both slices must be of equal length, one entry per forecast day.
///
/// # Arguments
///
/// * 'midday_pct' - midday illumination percentages, one per day
/// * 'phases' - moon phases, one per day
pub fn project_batch(
    midday_pct: &[f64],
    phases: &[MoonPhase],
) -> Result<Vec<f64>, ProcessingError> {
    midday_pct
        .iter()
        .zip(phases)
        .map(|(pct, phase)| project_to_midnight(*pct, *phase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_known_values() {
        assert_eq!(project_to_midnight(15.4, MoonPhase::WaxingCrescent).unwrap(), 19.0);
        assert_eq!(project_to_midnight(19.2, MoonPhase::WaxingCrescent).unwrap(), 23.1);
        assert_eq!(project_to_midnight(79.8, MoonPhase::WaningGibbous).unwrap(), 73.9);
    }

    #[test]
    fn test_projection_waxing_grows_waning_shrinks() {
        let waxing = project_to_midnight(50.0, MoonPhase::FirstQuarter).unwrap();
        let waning = project_to_midnight(50.0, MoonPhase::LastQuarter).unwrap();
        assert_eq!(waxing, 54.2);
        assert_eq!(waning, 43.8);
    }

    #[test]
    fn test_projection_edges_stay_in_range() {
        for phase in [MoonPhase::New, MoonPhase::Full, MoonPhase::WaningCrescent] {
            for pct in [0.0, 0.1, 25.0, 50.0, 75.0, 99.9, 100.0] {
                let projected = project_to_midnight(pct, phase).unwrap();
                assert!((0.0..=100.0).contains(&projected), "{} {:?}", projected, phase);
            }
        }
    }

    #[test]
    fn test_projection_deterministic() {
        let first = project_to_midnight(42.7, MoonPhase::WaxingGibbous).unwrap();
        let second = project_to_midnight(42.7, MoonPhase::WaxingGibbous).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_projection_rejects_out_of_range() {
        assert_eq!(
            project_to_midnight(100.1, MoonPhase::Full),
            Err(ProcessingError::InvalidPercentage(100.1))
        );
        assert_eq!(
            project_to_midnight(-0.1, MoonPhase::New),
            Err(ProcessingError::InvalidPercentage(-0.1))
        );
    }

    #[test]
    fn test_phase_parse_case_insensitive() {
        assert_eq!("Waxing Gibbous".parse::<MoonPhase>().unwrap(), MoonPhase::WaxingGibbous);
        assert_eq!("FULL".parse::<MoonPhase>().unwrap(), MoonPhase::Full);
        assert_eq!("new".parse::<MoonPhase>().unwrap(), MoonPhase::New);
    }

    #[test]
    fn test_phase_parse_rejects_unqualified_name() {
        assert_eq!(
            "gibbous".parse::<MoonPhase>(),
            Err(ProcessingError::InvalidPhase("gibbous".to_string()))
        );
    }

    #[test]
    fn test_batch_keeps_order() {
        let projected = project_batch(
            &[15.4, 19.2],
            &[MoonPhase::WaxingCrescent, MoonPhase::WaxingCrescent],
        )
        .unwrap();
        assert_eq!(projected, vec![19.0, 23.1]);
    }
}
