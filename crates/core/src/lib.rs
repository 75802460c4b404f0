//! Keyword spotting over transcribed audio.
//!
//! A transcript and a keyword list go in; first-occurrence match intervals,
//! precision/recall/F1 metrics, and audio-time spans for plotting come out.
//! Transcription and rendering stay behind injected collaborator traits.

pub mod audio;
pub mod pipeline;
pub mod shared;
pub mod spotting;
