use std::collections::BTreeMap;

use super::match_interval::MatchInterval;
use crate::audio::domain::transcription::is_failure_sentinel;

/// Everything one matching pass produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    /// One interval per found keyword occurrence, in input keyword order.
    pub intervals: Vec<MatchInterval>,
    /// Every normalized keyword, mapped to its recorded occurrences
    /// (empty when unmatched).
    pub positions: BTreeMap<String, Vec<MatchInterval>>,
    /// Character count of the normalized transcript the offsets index;
    /// 0 when nothing was searched.
    pub transcript_chars: usize,
}

impl MatchOutcome {
    /// Normalized keyword of each found occurrence, in `intervals` order.
    pub fn detected_keywords(&self) -> Vec<String> {
        self.intervals.iter().map(|m| m.keyword.clone()).collect()
    }
}

pub struct KeywordMatcher;

impl KeywordMatcher {
    /// Finds the first occurrence of each keyword in the transcript.
    ///
    /// Matching is case-insensitive: transcript and keywords are lowercased
    /// before searching, and offsets index characters of the lowercased
    /// transcript. A keyword repeated in the input records one occurrence
    /// per repetition under its single map key. An empty or
    /// failure-sentinel transcript matches nothing; an empty keyword
    /// matches at offset 0.
    pub fn find_matches(transcript: &str, keywords: &[String]) -> MatchOutcome {
        let lower_keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let mut positions: BTreeMap<String, Vec<MatchInterval>> = lower_keywords
            .iter()
            .map(|k| (k.clone(), Vec::new()))
            .collect();

        if transcript.is_empty() || is_failure_sentinel(transcript) {
            return MatchOutcome {
                intervals: Vec::new(),
                positions,
                transcript_chars: 0,
            };
        }

        let lower_transcript = transcript.to_lowercase();
        let mut intervals = Vec::new();

        for keyword in &lower_keywords {
            if let Some(byte_start) = lower_transcript.find(keyword.as_str()) {
                let start = lower_transcript[..byte_start].chars().count();
                let interval = MatchInterval {
                    keyword: keyword.clone(),
                    start,
                    end: start + keyword.chars().count(),
                };
                if let Some(occurrences) = positions.get_mut(keyword) {
                    occurrences.push(interval.clone());
                }
                intervals.push(interval);
            }
        }

        MatchOutcome {
            intervals,
            positions,
            transcript_chars: lower_transcript.chars().count(),
        }
    }
}
