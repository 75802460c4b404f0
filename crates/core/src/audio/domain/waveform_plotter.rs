use std::path::Path;

use super::audio_segment::AudioSegment;
use crate::spotting::domain::time_mapper::TimeInterval;

/// Renders an amplitude-vs-time plot with the matched spans highlighted and
/// persists it as an image artifact.
pub trait WaveformPlotter: Send {
    fn plot(
        &self,
        audio: &AudioSegment,
        intervals: &[TimeInterval],
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
