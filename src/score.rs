//! Blending of raw metric counts into a single coverage percentage.

use crate::model::{CoverageSummary, MetricStats};

/// Weight of statement coverage in the blended score.
pub const STATEMENT_WEIGHT: f64 = 0.75;

/// Weight of branch coverage in the blended score.
pub const BRANCH_WEIGHT: f64 = 0.25;

/// Coverage of a single metric group as a percentage in [0, 100].
///
/// A group with no instrumentable units counts as fully covered, and
/// skipped units count as covered (they were excluded on purpose, not
/// missed).
#[must_use]
pub fn metric_coverage(stats: &MetricStats) -> f64 {
    if stats.total == 0 {
        return 100.0;
    }
    (stats.covered + stats.skipped) as f64 / stats.total as f64 * 100.0
}

/// The blended percentage for a file or aggregate: pure statement
/// coverage when there are no branch units, otherwise statements
/// weighted at 0.75 and branches at 0.25. Functions and lines are not
/// part of the composite.
#[must_use]
pub fn blended_percent(summary: &CoverageSummary) -> f64 {
    let statements = metric_coverage(&summary.statements);
    if summary.branches.total == 0 {
        return statements;
    }
    statements * STATEMENT_WEIGHT + metric_coverage(&summary.branches) * BRANCH_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u64, covered: u64, skipped: u64) -> MetricStats {
        MetricStats {
            total,
            covered,
            skipped,
            pct: 0.0,
        }
    }

    #[test]
    fn test_metric_coverage_zero_total_is_vacuous_pass() {
        assert_eq!(metric_coverage(&stats(0, 0, 0)), 100.0);
    }

    #[test]
    fn test_metric_coverage_skipped_counts_as_covered() {
        assert_eq!(metric_coverage(&stats(10, 6, 4)), 100.0);
        assert_eq!(metric_coverage(&stats(10, 5, 0)), 50.0);
    }

    #[test]
    fn test_blended_statements_only_without_branches() {
        let summary = CoverageSummary {
            statements: stats(10, 8, 0),
            branches: stats(0, 0, 0),
            ..Default::default()
        };
        assert_eq!(blended_percent(&summary), 80.0);
    }

    #[test]
    fn test_blended_weights() {
        // statements 100%, branches 50% → 0.75*100 + 0.25*50 = 87.5
        let summary = CoverageSummary {
            statements: stats(10, 10, 0),
            branches: stats(2, 1, 0),
            ..Default::default()
        };
        assert_eq!(blended_percent(&summary), 87.5);
    }

    #[test]
    fn test_blended_in_range() {
        let summary = CoverageSummary {
            statements: stats(723, 286, 0),
            branches: stats(308, 88, 0),
            ..Default::default()
        };
        let percent = blended_percent(&summary);
        assert!(percent > 0.0 && percent < 100.0);
    }

    #[test]
    fn test_blended_functions_and_lines_ignored() {
        let summary = CoverageSummary {
            statements: stats(10, 10, 0),
            branches: stats(0, 0, 0),
            functions: stats(5, 0, 0),
            lines: stats(5, 0, 0),
        };
        assert_eq!(blended_percent(&summary), 100.0);
    }
}
