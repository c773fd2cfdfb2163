//! Classification and formatting of coverage percentages and deltas.
//!
//! Classification is expressed as enumerated tags; the emoji used to
//! present each tag is resolved separately so the logic can be tested
//! without string matching on symbols.

use crate::aggregate::ScoredStats;

/// Thresholds and layout used when formatting stats.
#[derive(Debug, Clone, Copy)]
pub struct FormatConfig {
    /// Below this percentage a node is classified as an error.
    pub error_threshold: f64,
    /// Below this percentage (at or above the error threshold) a node
    /// is classified as a warning.
    pub warn_threshold: f64,
    /// Column width numeric fields are right-aligned to.
    pub padding: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            error_threshold: 50.0,
            warn_threshold: 80.0,
            padding: 7,
        }
    }
}

/// Severity of an absolute coverage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Empty,
    Error,
    Warning,
    Perfect,
    Ok,
}

impl Severity {
    /// Classify a percentage. Checks run in precedence order; the first
    /// match wins.
    #[must_use]
    pub fn classify(percent: f64, config: &FormatConfig) -> Self {
        if percent == 0.0 {
            Severity::Empty
        } else if percent < config.error_threshold {
            Severity::Error
        } else if percent < config.warn_threshold {
            Severity::Warning
        } else if percent == 100.0 {
            Severity::Perfect
        } else {
            Severity::Ok
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Empty => "❌",
            Severity::Error => "💔",
            Severity::Warning => "💛",
            Severity::Perfect => "✅",
            Severity::Ok => "💚",
        }
    }
}

/// Direction and magnitude of a nonzero coverage delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Regressed all the way to zero coverage.
    Alarming,
    SevereRegression,
    ModerateRegression,
    MinorRegression,
    /// Reached full coverage.
    Celebratory,
    OutstandingImprovement,
    StrongImprovement,
    MildImprovement,
}

impl Trend {
    /// Classify a nonzero delta, given the current percentage. Checks
    /// run in precedence order; the first match wins.
    #[must_use]
    pub fn classify(delta: f64, percent: f64) -> Self {
        if percent == 0.0 {
            Trend::Alarming
        } else if delta < -10.0 {
            Trend::SevereRegression
        } else if delta < -5.0 {
            Trend::ModerateRegression
        } else if delta < 0.0 {
            Trend::MinorRegression
        } else if percent == 100.0 {
            Trend::Celebratory
        } else if delta > 50.0 {
            Trend::OutstandingImprovement
        } else if delta > 10.0 {
            Trend::StrongImprovement
        } else {
            Trend::MildImprovement
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            Trend::Alarming => "😱",
            Trend::SevereRegression => "😡",
            Trend::ModerateRegression => "😭",
            Trend::MinorRegression => "😥",
            Trend::Celebratory => "🎉",
            Trend::OutstandingImprovement => "😍",
            Trend::StrongImprovement => "😀",
            Trend::MildImprovement => "🙂",
        }
    }
}

/// Format an absolute percentage with its severity marker, two decimal
/// digits, right-aligned to the configured width.
#[must_use]
pub fn format_percent(percent: f64, config: &FormatConfig) -> String {
    let number = format!("{percent:.2}");
    format!(
        "{:>width$}% {}",
        number,
        Severity::classify(percent, config).emoji(),
        width = config.padding
    )
}

/// Format a signed delta against a prior percentage, e.g. ` +10.00% 😀`.
/// Positive deltas carry an explicit `+`.
#[must_use]
pub fn format_delta(percent: f64, prior_percent: f64, config: &FormatConfig) -> String {
    let delta = percent - prior_percent;
    let number = if delta > 0.0 {
        format!("+{delta:.2}")
    } else {
        format!("{delta:.2}")
    };
    format!(
        "{:>width$}% {}",
        number,
        Trend::classify(delta, percent).emoji(),
        width = config.padding
    )
}

/// Format current stats plus an optional delta column against a prior
/// run. A zero delta renders an explicit `(no change)` marker so it is
/// distinguishable from the first-ever run, which has no delta column.
#[must_use]
pub fn format_diff(
    stats: &ScoredStats,
    prior: Option<&ScoredStats>,
    config: &FormatConfig,
) -> String {
    let percent = stats.percent;
    let prior_percent = match prior {
        Some(p) => p.percent,
        None => return format_percent(percent, config),
    };
    if percent == prior_percent {
        format!(
            "{} {:>width$}",
            format_percent(percent, config),
            "(no change)",
            width = config.padding
        )
    } else {
        format!(
            "{} {}",
            format_percent(percent, config),
            format_delta(percent, prior_percent, config)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(percent: f64) -> ScoredStats {
        ScoredStats { percent }
    }

    #[test]
    fn test_classify_severity() {
        let config = FormatConfig::default();
        assert_eq!(Severity::classify(0.0, &config), Severity::Empty);
        assert_eq!(Severity::classify(49.99, &config), Severity::Error);
        assert_eq!(Severity::classify(50.0, &config), Severity::Warning);
        assert_eq!(Severity::classify(79.99, &config), Severity::Warning);
        assert_eq!(Severity::classify(80.0, &config), Severity::Ok);
        assert_eq!(Severity::classify(99.99, &config), Severity::Ok);
        assert_eq!(Severity::classify(100.0, &config), Severity::Perfect);
    }

    #[test]
    fn test_classify_severity_custom_thresholds() {
        let config = FormatConfig {
            error_threshold: 30.0,
            warn_threshold: 90.0,
            ..Default::default()
        };
        assert_eq!(Severity::classify(40.0, &config), Severity::Warning);
        assert_eq!(Severity::classify(85.0, &config), Severity::Warning);
        assert_eq!(Severity::classify(95.0, &config), Severity::Ok);
    }

    #[test]
    fn test_classify_trend() {
        // Regression to zero wins over every other check.
        assert_eq!(Trend::classify(-5.0, 0.0), Trend::Alarming);
        assert_eq!(Trend::classify(-20.0, 30.0), Trend::SevereRegression);
        assert_eq!(Trend::classify(-7.0, 60.0), Trend::ModerateRegression);
        assert_eq!(Trend::classify(-0.5, 60.0), Trend::MinorRegression);
        // Reaching full coverage wins over improvement magnitude.
        assert_eq!(Trend::classify(60.0, 100.0), Trend::Celebratory);
        assert_eq!(Trend::classify(60.0, 99.0), Trend::OutstandingImprovement);
        assert_eq!(Trend::classify(20.0, 90.0), Trend::StrongImprovement);
        assert_eq!(Trend::classify(10.0, 90.0), Trend::MildImprovement);
        assert_eq!(Trend::classify(0.5, 90.0), Trend::MildImprovement);
    }

    #[test]
    fn test_format_percent_padding() {
        let config = FormatConfig::default();
        assert_eq!(format_percent(100.0, &config), " 100.00% ✅");
        assert_eq!(format_percent(0.0, &config), "   0.00% ❌");
        assert_eq!(format_percent(45.69, &config), "  45.69% 💔");
    }

    #[test]
    fn test_format_delta_signs() {
        let config = FormatConfig::default();
        assert_eq!(format_delta(90.0, 80.0, &config), " +10.00% 🙂");
        assert_eq!(format_delta(80.0, 90.0, &config), " -10.00% 😥");
    }

    #[test]
    fn test_format_diff_no_prior() {
        let config = FormatConfig::default();
        assert_eq!(format_diff(&stats(0.0), None, &config), "   0.00% ❌");
    }

    #[test]
    fn test_format_diff_no_change() {
        let config = FormatConfig::default();
        assert_eq!(
            format_diff(&stats(80.0), Some(&stats(80.0)), &config),
            "  80.00% 💚 (no change)"
        );
    }

    #[test]
    fn test_format_diff_celebratory_at_full_coverage() {
        let config = FormatConfig::default();
        assert_eq!(
            format_diff(&stats(100.0), Some(&stats(40.0)), &config),
            " 100.00% ✅  +60.00% 🎉"
        );
    }

    #[test]
    fn test_format_diff_regression() {
        let config = FormatConfig::default();
        assert_eq!(
            format_diff(&stats(42.0), Some(&stats(62.0)), &config),
            "  42.00% 💔  -20.00% 😡"
        );
    }
}
