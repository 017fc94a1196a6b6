//! Exposure and kill-switch risk classification.
//!
//! Pure classification only; enforcement lives on the backend. The
//! precedence is a display contract: an asserted kill switch always
//! dominates the shown exposure, even at zero open positions, so an
//! operator-initiated halt is unmistakable.

/// Default maximum concurrent positions for exposure thresholding.
pub const DEFAULT_MAX_POSITIONS: u32 = 5;

/// Exposure percentage at or above which risk is HIGH.
const HIGH_EXPOSURE_PCT: f64 = 80.0;

/// Exposure percentage at or above which risk is MODERATE.
const MODERATE_EXPOSURE_PCT: f64 = 40.0;

/// Discrete risk level shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    KillSwitch,
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::KillSwitch => "KILL SWITCH",
            RiskLevel::High => "HIGH",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::Low => "LOW",
        }
    }

    /// Display color for the risk badge and exposure bar.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::KillSwitch => "#dc2626",
            RiskLevel::High => "#ef4444",
            RiskLevel::Moderate => "#f59e0b",
            RiskLevel::Low => "#22c55e",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification result for the risk panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// Discrete level, kill switch dominating.
    pub level: RiskLevel,

    /// Exposure bar fill in [0, 100]. Forced to 100 under kill switch.
    pub exposure_pct: f64,

    /// Display color, same as `level.color()`.
    pub color: &'static str,
}

/// Classify current exposure into a discrete risk level.
///
/// Precedence, first match wins: kill switch, then exposure >= 80%,
/// then >= 40%, then LOW. `max_positions == 0` degenerates to full
/// exposure rather than dividing by zero.
pub fn classify(kill_switch_active: bool, active_positions: u32, max_positions: u32) -> RiskAssessment {
    let exposure_pct = if max_positions == 0 {
        100.0
    } else {
        (f64::from(active_positions) / f64::from(max_positions)) * 100.0
    };

    let level = if kill_switch_active {
        RiskLevel::KillSwitch
    } else if exposure_pct >= HIGH_EXPOSURE_PCT {
        RiskLevel::High
    } else if exposure_pct >= MODERATE_EXPOSURE_PCT {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    // The exposure bar is forced full under kill switch regardless of
    // the actual ratio.
    let exposure_pct = match level {
        RiskLevel::KillSwitch => 100.0,
        _ => exposure_pct.min(100.0),
    };

    RiskAssessment {
        level,
        exposure_pct,
        color: level.color(),
    }
}

/// `classify` with the default position cap.
pub fn classify_default(kill_switch_active: bool, active_positions: u32) -> RiskAssessment {
    classify(kill_switch_active, active_positions, DEFAULT_MAX_POSITIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_switch_dominates_zero_positions() {
        let assessment = classify_default(true, 0);
        assert_eq!(assessment.level, RiskLevel::KillSwitch);
        assert_eq!(assessment.exposure_pct, 100.0);
    }

    #[test]
    fn test_kill_switch_dominates_any_exposure() {
        for positions in 0..=10 {
            assert_eq!(classify(true, positions, 5).level, RiskLevel::KillSwitch);
        }
    }

    #[test]
    fn test_high_at_80_pct() {
        let assessment = classify(false, 4, 5);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.exposure_pct, 80.0);
    }

    #[test]
    fn test_moderate_at_two_of_five() {
        let assessment = classify(false, 2, 5);
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(assessment.exposure_pct, 40.0);
    }

    #[test]
    fn test_moderate_band_below_high() {
        assert_eq!(classify(false, 3, 5).level, RiskLevel::Moderate);
        assert_eq!(classify(false, 5, 10).level, RiskLevel::Moderate);
    }

    #[test]
    fn test_low_below_40_pct() {
        let assessment = classify(false, 1, 5);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.exposure_pct, 20.0);

        assert_eq!(classify(false, 3, 10).level, RiskLevel::Low);
        assert_eq!(classify(false, 0, 5).level, RiskLevel::Low);
    }

    #[test]
    fn test_exposure_capped_at_100() {
        let assessment = classify(false, 12, 5);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.exposure_pct, 100.0);
    }

    #[test]
    fn test_zero_max_positions_is_full_exposure() {
        let assessment = classify(false, 0, 0);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.exposure_pct, 100.0);
    }

    #[test]
    fn test_color_matches_level() {
        let assessment = classify_default(false, 1);
        assert_eq!(assessment.color, RiskLevel::Low.color());
    }
}
