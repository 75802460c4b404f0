use super::audio_segment::AudioSegment;
use super::transcription::Transcription;

/// Domain interface for the speech-to-text collaborator.
///
/// Consumes a canonical waveform (16 kHz mono) and an IETF-style language
/// tag. Infallible by contract: every recognized failure mode travels
/// in-band as a [`Transcription`] variant, never as a raised error.
pub trait Transcriber: Send {
    fn transcribe(&self, audio: &AudioSegment, language: &str) -> Transcription;
}
