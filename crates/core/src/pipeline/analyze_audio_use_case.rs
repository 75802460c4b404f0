use std::path::Path;

use super::spotting_pipeline::SpottingPipeline;
use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::transcriber::Transcriber;
use crate::audio::domain::waveform_plotter::WaveformPlotter;
use crate::shared::constants::{CANONICAL_SAMPLE_RATE, DEFAULT_LANGUAGE_TAG};
use crate::spotting::domain::report::KeywordReport;

/// Audio-level entry point: transcribe a waveform, spot keywords, and hand
/// the matched time spans to the plotter.
pub struct AnalyzeAudioUseCase {
    transcriber: Box<dyn Transcriber>,
    plotter: Option<Box<dyn WaveformPlotter>>,
    keywords: Vec<String>,
    language: String,
    pipeline: SpottingPipeline,
}

impl AnalyzeAudioUseCase {
    pub fn new(
        transcriber: Box<dyn Transcriber>,
        plotter: Option<Box<dyn WaveformPlotter>>,
        keywords: Vec<String>,
        language: String,
        pipeline: SpottingPipeline,
    ) -> Self {
        Self {
            transcriber,
            plotter,
            keywords,
            language,
            pipeline,
        }
    }

    /// Builds a use case with the default language tag and scoring mode.
    pub fn with_defaults(
        transcriber: Box<dyn Transcriber>,
        plotter: Option<Box<dyn WaveformPlotter>>,
        keywords: Vec<String>,
    ) -> Self {
        Self::new(
            transcriber,
            plotter,
            keywords,
            DEFAULT_LANGUAGE_TAG.to_string(),
            SpottingPipeline::default(),
        )
    }

    pub fn run(
        &self,
        audio: &AudioSegment,
        plot_path: &Path,
    ) -> Result<KeywordReport, Box<dyn std::error::Error>> {
        // 1. Derive the audio duration the time mapping needs
        let duration = audio.duration();
        if !audio.is_canonical() {
            log::warn!(
                "audio segment is {} Hz x{} ch; collaborators expect {} Hz mono",
                audio.sample_rate(),
                audio.channels(),
                CANONICAL_SAMPLE_RATE
            );
        }

        // 2. Transcribe through the injected collaborator
        let transcription = self.transcriber.transcribe(audio, &self.language);
        if !transcription.is_usable() {
            log::warn!("transcription yielded no usable text");
        }

        // 3. Spot and score keywords
        let report = self
            .pipeline
            .run(&transcription, &self.keywords, duration)?;

        // 4. Plot the matched spans, even when nothing matched
        if let Some(ref plotter) = self.plotter {
            plotter.plot(audio, &report.keyword_intervals, plot_path)?;
            log::info!("waveform plot written to {}", plot_path.display());
        }

        log::info!(
            "analyzed {:.2}s of audio: {} of {} keywords detected",
            duration,
            report.detected_count(),
            self.keywords.len()
        );

        Ok(report)
    }
}
