use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::match_interval::MatchInterval;

/// How per-keyword false positives are attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Every other keyword's recorded occurrences count as false positives
    /// for the keyword being scored. Reproduces the legacy accounting
    /// number-for-number and is the default for output compatibility.
    #[default]
    CrossKeyword,
    /// Only the keyword's own detections are attributed to it; false
    /// positives stay zero.
    Isolated,
}

/// Precision/recall/F1 triple, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl Score {
    /// Computes the triple from confusion counts. Zero denominators yield
    /// 0.0 components, never a division fault.
    pub fn from_counts(
        true_positives: usize,
        false_positives: usize,
        false_negatives: usize,
    ) -> Self {
        let tp = true_positives as f64;
        let detected = (true_positives + false_positives) as f64;
        let expected = (true_positives + false_negatives) as f64;

        let precision = if detected > 0.0 { tp / detected } else { 0.0 };
        let recall = if expected > 0.0 { tp / expected } else { 0.0 };
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Self {
            precision,
            recall,
            f1_score,
        }
    }
}

/// One keyword's score together with the confusion counts it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl KeywordMetrics {
    pub fn from_counts(
        true_positives: usize,
        false_positives: usize,
        false_negatives: usize,
    ) -> Self {
        let score = Score::from_counts(true_positives, false_positives, false_negatives);
        Self {
            precision: score.precision,
            recall: score.recall,
            f1_score: score.f1_score,
            true_positives,
            false_positives,
            false_negatives,
        }
    }
}

pub struct MetricsEngine;

impl MetricsEngine {
    /// Detection quality over the whole keyword set.
    ///
    /// True positives use set semantics (duplicates collapse); false
    /// positives and negatives are count-based, so duplicated entries in
    /// either input inflate them.
    pub fn aggregate(detected: &[String], expected: &[String]) -> Score {
        let detected_set: BTreeSet<&str> = detected.iter().map(String::as_str).collect();
        let expected_set: BTreeSet<&str> = expected.iter().map(String::as_str).collect();

        let true_positives = detected_set.intersection(&expected_set).count();
        let false_positives = detected.len() - true_positives;
        let false_negatives = expected.len() - true_positives;

        Score::from_counts(true_positives, false_positives, false_negatives)
    }

    /// Per-keyword breakdown, keyed by normalized keyword.
    ///
    /// Iterates the expected keywords (duplicates overwrite their single
    /// key) and scores each against the recorded occurrences. Under
    /// `CrossKeyword` attribution, every other keyword's occurrence count
    /// lands in this keyword's false positives; under `Isolated` they stay
    /// zero. A keyword with no recorded occurrence counts one false
    /// negative.
    pub fn per_keyword(
        positions: &BTreeMap<String, Vec<MatchInterval>>,
        expected: &[String],
        mode: ScoringMode,
    ) -> BTreeMap<String, KeywordMetrics> {
        let total_occurrences: usize = positions.values().map(Vec::len).sum();

        let mut metrics = BTreeMap::new();
        for keyword in expected {
            let keyword = keyword.to_lowercase();
            let true_positives = positions.get(&keyword).map_or(0, Vec::len);
            let false_positives = match mode {
                ScoringMode::CrossKeyword => total_occurrences - true_positives,
                ScoringMode::Isolated => 0,
            };
            let false_negatives = if true_positives == 0 { 1 } else { 0 };
            metrics.insert(
                keyword,
                KeywordMetrics::from_counts(true_positives, false_positives, false_negatives),
            );
        }
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn positions_with_counts(entries: &[(&str, usize)]) -> BTreeMap<String, Vec<MatchInterval>> {
        entries
            .iter()
            .map(|(keyword, count)| {
                let occurrences = (0..*count)
                    .map(|i| MatchInterval {
                        keyword: keyword.to_string(),
                        start: i * 10,
                        end: i * 10 + keyword.len(),
                    })
                    .collect();
                (keyword.to_string(), occurrences)
            })
            .collect()
    }

    // ── Score ────────────────────────────────────────────────────────

    #[rstest]
    #[case::all_zero(0, 0, 0, 0.0, 0.0, 0.0)]
    #[case::only_false_positives(0, 3, 0, 0.0, 0.0, 0.0)]
    #[case::only_false_negatives(0, 0, 2, 0.0, 0.0, 0.0)]
    #[case::perfect(3, 0, 0, 1.0, 1.0, 1.0)]
    #[case::balanced(2, 2, 2, 0.5, 0.5, 0.5)]
    fn test_score_from_counts(
        #[case] tp: usize,
        #[case] fp: usize,
        #[case] fn_count: usize,
        #[case] precision: f64,
        #[case] recall: f64,
        #[case] f1: f64,
    ) {
        let score = Score::from_counts(tp, fp, fn_count);
        assert_relative_eq!(score.precision, precision);
        assert_relative_eq!(score.recall, recall);
        assert_relative_eq!(score.f1_score, f1);
    }

    // ── Aggregate ────────────────────────────────────────────────────

    #[test]
    fn test_aggregate_partial_detection() {
        // "the quick brown fox" searched for quick/fox/cat.
        let score = MetricsEngine::aggregate(
            &owned(&["quick", "fox"]),
            &owned(&["quick", "fox", "cat"]),
        );
        assert_relative_eq!(score.precision, 1.0);
        assert_relative_eq!(score.recall, 2.0 / 3.0);
        assert_relative_eq!(score.f1_score, 0.8);
    }

    #[test]
    fn test_aggregate_empty_inputs() {
        let score = MetricsEngine::aggregate(&[], &[]);
        assert_relative_eq!(score.precision, 0.0);
        assert_relative_eq!(score.recall, 0.0);
        assert_relative_eq!(score.f1_score, 0.0);
    }

    #[test]
    fn test_aggregate_nothing_detected() {
        let score = MetricsEngine::aggregate(&[], &owned(&["quick", "fox"]));
        assert_relative_eq!(score.precision, 0.0);
        assert_relative_eq!(score.recall, 0.0);
        assert_relative_eq!(score.f1_score, 0.0);
    }

    #[test]
    fn test_aggregate_duplicate_detections_inflate_false_positives() {
        // TP collapses to 1 by set semantics, the second detection counts
        // as a false positive.
        let score = MetricsEngine::aggregate(&owned(&["fox", "fox"]), &owned(&["fox"]));
        assert_relative_eq!(score.precision, 0.5);
        assert_relative_eq!(score.recall, 1.0);
    }

    #[test]
    fn test_aggregate_duplicate_expected_inflate_false_negatives() {
        let score = MetricsEngine::aggregate(&owned(&["fox"]), &owned(&["fox", "fox"]));
        assert_relative_eq!(score.precision, 1.0);
        assert_relative_eq!(score.recall, 0.5);
    }

    // ── Per-keyword ──────────────────────────────────────────────────

    #[test]
    fn test_per_keyword_cross_attribution() {
        let positions = positions_with_counts(&[("quick", 1), ("fox", 1), ("cat", 0)]);
        let metrics = MetricsEngine::per_keyword(
            &positions,
            &owned(&["quick", "fox", "cat"]),
            ScoringMode::CrossKeyword,
        );

        // "fox"'s hit is attributed to "quick" as a false positive.
        assert_eq!(metrics["quick"].true_positives, 1);
        assert_eq!(metrics["quick"].false_positives, 1);
        assert_eq!(metrics["quick"].false_negatives, 0);
        assert_relative_eq!(metrics["quick"].precision, 0.5);
        assert_relative_eq!(metrics["quick"].recall, 1.0);

        assert_eq!(metrics["cat"].true_positives, 0);
        assert_eq!(metrics["cat"].false_positives, 2);
        assert_eq!(metrics["cat"].false_negatives, 1);
        assert_relative_eq!(metrics["cat"].precision, 0.0);
        assert_relative_eq!(metrics["cat"].recall, 0.0);
    }

    #[test]
    fn test_per_keyword_isolated_attribution() {
        let positions = positions_with_counts(&[("quick", 1), ("fox", 1), ("cat", 0)]);
        let metrics = MetricsEngine::per_keyword(
            &positions,
            &owned(&["quick", "fox", "cat"]),
            ScoringMode::Isolated,
        );

        assert_eq!(metrics["quick"].false_positives, 0);
        assert_relative_eq!(metrics["quick"].precision, 1.0);
        assert_relative_eq!(metrics["quick"].f1_score, 1.0);

        assert_eq!(metrics["cat"].false_positives, 0);
        assert_relative_eq!(metrics["cat"].precision, 0.0);
    }

    #[test]
    fn test_per_keyword_one_entry_per_unique_keyword() {
        let positions = positions_with_counts(&[("fox", 1)]);
        let metrics = MetricsEngine::per_keyword(
            &positions,
            &owned(&["fox", "fox", "FOX"]),
            ScoringMode::CrossKeyword,
        );
        assert_eq!(metrics.len(), 1);
        assert!(metrics.contains_key("fox"));
    }

    #[test]
    fn test_per_keyword_duplicate_occurrences_count_as_true_positives() {
        // A keyword listed twice records two occurrences under one key.
        let positions = positions_with_counts(&[("fox", 2)]);
        let metrics =
            MetricsEngine::per_keyword(&positions, &owned(&["fox"]), ScoringMode::CrossKeyword);
        assert_eq!(metrics["fox"].true_positives, 2);
        assert_eq!(metrics["fox"].false_positives, 0);
        assert_relative_eq!(metrics["fox"].precision, 1.0);
    }

    #[test]
    fn test_per_keyword_empty_expected() {
        let positions = positions_with_counts(&[]);
        let metrics = MetricsEngine::per_keyword(&positions, &[], ScoringMode::CrossKeyword);
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_per_keyword_mixed_case_expected_keys_by_lowercase() {
        let positions = positions_with_counts(&[("fox", 1)]);
        let metrics =
            MetricsEngine::per_keyword(&positions, &owned(&["FOX"]), ScoringMode::CrossKeyword);
        assert_eq!(metrics["fox"].true_positives, 1);
    }

    #[test]
    fn test_default_scoring_mode_is_cross_keyword() {
        assert_eq!(ScoringMode::default(), ScoringMode::CrossKeyword);
    }
}
