//! Uniform in-memory representation of the coverage summary dataset,
//! as emitted by Istanbul's json-summary reporter: one metric group per
//! kind (statements, branches, functions, lines) per source file.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Counts for a single metric kind within one file or aggregate.
///
/// `pct` is carried through from the input but is informational only;
/// all scoring is recomputed from the raw counts.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MetricStats {
    pub total: u64,
    pub covered: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub pct: f64,
}

impl MetricStats {
    /// Field-wise addition of raw counts. `pct` is not merged; it is
    /// meaningless on an aggregate and recomputed by the scorer.
    pub fn merge(&mut self, other: &MetricStats) {
        self.total += other.total;
        self.covered += other.covered;
        self.skipped += other.skipped;
    }
}

/// All metric groups for one file, or the merged groups of many files.
///
/// Merging is field-wise addition per group, so it is associative and
/// commutative: aggregating files in any order yields the same summary.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CoverageSummary {
    pub statements: MetricStats,
    pub branches: MetricStats,
    #[serde(default)]
    pub functions: MetricStats,
    #[serde(default)]
    pub lines: MetricStats,
}

impl CoverageSummary {
    pub fn merge(&mut self, other: &CoverageSummary) {
        self.statements.merge(&other.statements);
        self.branches.merge(&other.branches);
        self.functions.merge(&other.functions);
        self.lines.merge(&other.lines);
    }
}

/// The parsed dataset: absolute file path → per-file summary.
///
/// An ordered map so that folder discovery order (and therefore all
/// derived output) is deterministic regardless of input key order.
pub type CoverageMap = BTreeMap<String, CoverageSummary>;

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
    fn test_merge_adds_counts() {
        let mut a = stats(10, 5, 1);
        a.merge(&stats(4, 2, 0));
        assert_eq!(a.total, 14);
        assert_eq!(a.covered, 7);
        assert_eq!(a.skipped, 1);
    }

    #[test]
    fn test_merge_commutative() {
        let x = CoverageSummary {
            statements: stats(10, 5, 0),
            branches: stats(4, 1, 0),
            ..Default::default()
        };
        let y = CoverageSummary {
            statements: stats(6, 6, 0),
            branches: stats(2, 2, 0),
            ..Default::default()
        };

        let mut xy = x;
        xy.merge(&y);
        let mut yx = y;
        yx.merge(&x);

        assert_eq!(xy.statements.total, yx.statements.total);
        assert_eq!(xy.statements.covered, yx.statements.covered);
        assert_eq!(xy.branches.total, yx.branches.total);
        assert_eq!(xy.branches.covered, yx.branches.covered);
    }

    #[test]
    fn test_merge_associative() {
        let parts = [stats(10, 5, 0), stats(3, 3, 1), stats(7, 0, 0)];

        let mut left = parts[0];
        left.merge(&parts[1]);
        left.merge(&parts[2]);

        let mut right = parts[1];
        right.merge(&parts[2]);
        let mut first = parts[0];
        first.merge(&right);

        assert_eq!(left.total, first.total);
        assert_eq!(left.covered, first.covered);
        assert_eq!(left.skipped, first.skipped);
    }
}
