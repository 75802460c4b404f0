pub mod audio_segment;
pub mod transcriber;
pub mod transcription;
pub mod waveform_plotter;
