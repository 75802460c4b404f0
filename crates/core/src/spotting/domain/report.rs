use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metrics_engine::{KeywordMetrics, Score};
use super::time_mapper::TimeInterval;

/// Terminal product of one spotting run, owned by the caller and
/// serializable for presentation collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// The transcript as the collaborator produced it, original case.
    pub transcription: String,
    /// Whole-set detection quality.
    pub aggregate: Score,
    /// Per-keyword breakdown, keyed by normalized keyword.
    pub keyword_metrics: BTreeMap<String, KeywordMetrics>,
    /// Matched spans on the audio time axis, in input keyword order.
    pub keyword_intervals: Vec<TimeInterval>,
}

impl KeywordReport {
    /// Number of keyword occurrences that were found in the transcript.
    pub fn detected_count(&self) -> usize {
        self.keyword_intervals.len()
    }
}
