use serde::{Deserialize, Serialize};

use super::match_interval::MatchInterval;

/// A keyword match projected onto the audio time axis, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub keyword: String,
    pub start_secs: f64,
    pub end_secs: f64,
}

impl TimeInterval {
    pub fn duration(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

pub struct TimeMapper;

impl TimeMapper {
    /// Projects character-offset matches onto the audio time axis by linear
    /// proportion.
    ///
    /// **Uniform-rate approximation:** a character at offset `i` of an
    /// `n`-character transcript is taken to be spoken at
    /// `i / n * audio_duration_secs`. This is deliberately not a
    /// word-timing alignment and must stay proportional; it needs no
    /// recognizer timestamps.
    ///
    /// A zero `transcript_chars` yields an empty sequence instead of a
    /// division fault.
    pub fn to_time_intervals(
        matches: &[MatchInterval],
        transcript_chars: usize,
        audio_duration_secs: f64,
    ) -> Vec<TimeInterval> {
        if transcript_chars == 0 {
            return Vec::new();
        }
        let length = transcript_chars as f64;

        matches
            .iter()
            .map(|m| TimeInterval {
                keyword: m.keyword.clone(),
                start_secs: m.start as f64 / length * audio_duration_secs,
                end_secs: m.end as f64 / length * audio_duration_secs,
            })
            .collect()
    }
}
