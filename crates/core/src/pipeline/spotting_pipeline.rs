use thiserror::Error;

use crate::audio::domain::transcription::Transcription;
use crate::spotting::domain::keyword_matcher::KeywordMatcher;
use crate::spotting::domain::metrics_engine::{MetricsEngine, ScoringMode};
use crate::spotting::domain::report::KeywordReport;
use crate::spotting::domain::time_mapper::TimeMapper;

#[derive(Debug, Error)]
pub enum SpotError {
    /// No usable transcript reached the pipeline; nothing was scored.
    #[error("no transcription available")]
    NoTranscription,
}

/// Runs the transcript-to-report stages in order: match, score, time-align,
/// assemble.
///
/// The only reachable failure is a missing transcript at the first stage;
/// the later stages are pure computations over well-typed inputs.
#[derive(Debug, Default)]
pub struct SpottingPipeline {
    scoring_mode: ScoringMode,
}

impl SpottingPipeline {
    pub fn new(scoring_mode: ScoringMode) -> Self {
        Self { scoring_mode }
    }

    pub fn run(
        &self,
        transcription: &Transcription,
        keywords: &[String],
        audio_duration_secs: f64,
    ) -> Result<KeywordReport, SpotError> {
        // 1. Gate on a usable transcript
        let text = transcription
            .text()
            .filter(|t| !t.is_empty())
            .ok_or(SpotError::NoTranscription)?;

        // 2. Match keywords against the transcript
        let outcome = KeywordMatcher::find_matches(text, keywords);

        // 3. Score the detections, aggregate and per keyword
        let expected: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let detected = outcome.detected_keywords();
        let aggregate = MetricsEngine::aggregate(&detected, &expected);
        let keyword_metrics =
            MetricsEngine::per_keyword(&outcome.positions, &expected, self.scoring_mode);

        // 4. Project matches onto the audio time axis
        let keyword_intervals = TimeMapper::to_time_intervals(
            &outcome.intervals,
            outcome.transcript_chars,
            audio_duration_secs,
        );

        log::debug!(
            "spotted {} of {} keywords across {} transcript chars",
            keyword_intervals.len(),
            keywords.len(),
            outcome.transcript_chars
        );

        // 5. Assemble the report
        Ok(KeywordReport {
            transcription: text.to_string(),
            aggregate,
            keyword_metrics,
            keyword_intervals,
        })
    }
}
