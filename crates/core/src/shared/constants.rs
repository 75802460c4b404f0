/// Exchange format for decoded audio handed to collaborators: 16 kHz mono.
pub const CANONICAL_SAMPLE_RATE: u32 = 16000;
pub const CANONICAL_CHANNELS: u16 = 1;

/// Language tag sent to the transcription collaborator when the caller
/// does not pick one.
pub const DEFAULT_LANGUAGE_TAG: &str = "en-US";
