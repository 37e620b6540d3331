//! Placement speed scoring.

use std::fmt;

use crate::dataset::Speed;

/// Score penalty per reported interview day.
pub const INTERVIEW_DAY_WEIGHT: f64 = 12.0;
/// Score penalty per reported start day.
pub const START_DAY_WEIGHT: f64 = 6.0;

const VERY_FAST_FLOOR: f64 = 78.0;
const FAST_FLOOR: f64 = 60.0;
const MODERATE_FLOOR: f64 = 45.0;

/// Speed bucket shown next to each agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedClass {
    VeryFast,
    Fast,
    Moderate,
    Slow,
}

impl SpeedClass {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SpeedClass::VeryFast => "Very Fast",
            SpeedClass::Fast => "Fast",
            SpeedClass::Moderate => "Moderate",
            SpeedClass::Slow => "Slow",
        }
    }
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Placement score on a 0 to 100 scale, higher means faster. Unreported
/// components are charged at [`crate::dataset::MISSING_SPEED_DAYS`], and the
/// score never drops below zero.
#[must_use]
pub fn placement_score(speed: Speed) -> f64 {
    let penalty = speed.interview_days_or_default() * INTERVIEW_DAY_WEIGHT
        + speed.start_days_or_default() * START_DAY_WEIGHT;
    (100.0 - penalty).max(0.0)
}

/// Bucket a speed by its placement score.
#[must_use]
pub fn classify(speed: Speed) -> SpeedClass {
    let score = placement_score(speed);
    if score >= VERY_FAST_FLOOR {
        SpeedClass::VeryFast
    } else if score >= FAST_FLOOR {
        SpeedClass::Fast
    } else if score >= MODERATE_FLOOR {
        SpeedClass::Moderate
    } else {
        SpeedClass::Slow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(interview: f64, start: f64) -> Speed {
        Speed {
            interview_days: Some(interview),
            start_days: Some(start),
        }
    }

    #[test]
    fn scores_match_known_listings() {
        assert!((placement_score(speed(1.5, 3.5)) - 61.0).abs() < 1e-9);
        assert!((placement_score(speed(3.2, 7.0)) - 19.6).abs() < 1e-9);
        assert!((placement_score(speed(1.8, 4.2)) - 53.2).abs() < 1e-9);
    }

    #[test]
    fn score_is_floored_at_zero() {
        assert_eq!(placement_score(speed(10.0, 10.0)), 0.0);
        assert_eq!(placement_score(Speed::default()), 0.0);
    }

    #[test]
    fn extreme_inputs_reach_both_ends_of_the_scale() {
        assert_eq!(placement_score(speed(0.0, 0.0)), 100.0);
        assert_eq!(classify(speed(0.0, 0.0)), SpeedClass::VeryFast);

        // 9 interview days alone overshoots the 100-point budget.
        assert_eq!(placement_score(speed(9.0, 0.0)), 0.0);
        assert_eq!(classify(speed(9.0, 0.0)), SpeedClass::Slow);
    }

    #[test]
    fn classification_buckets() {
        assert_eq!(classify(speed(0.5, 1.0)), SpeedClass::VeryFast);
        assert_eq!(classify(speed(1.5, 3.5)), SpeedClass::Fast);
        assert_eq!(classify(speed(1.8, 4.2)), SpeedClass::Moderate);
        assert_eq!(classify(speed(3.2, 7.0)), SpeedClass::Slow);
        assert_eq!(classify(Speed::default()), SpeedClass::Slow);
    }

    #[test]
    fn class_labels() {
        assert_eq!(SpeedClass::VeryFast.label(), "Very Fast");
        assert_eq!(SpeedClass::Slow.to_string(), "Slow");
    }
}
