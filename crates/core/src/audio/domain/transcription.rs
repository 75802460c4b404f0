/// Sentinel returned by the transcription collaborator when the audio
/// carried no recognizable speech.
pub const UNINTELLIGIBLE_SENTINEL: &str = "speech recognition could not understand audio";

/// Sentinel prefix returned when the transcription service request failed.
/// The underlying error description follows after "; ".
pub const REQUEST_FAILED_SENTINEL: &str =
    "could not request results from speech recognition service";

/// Outcome of one transcription attempt.
///
/// The legacy collaborator contract carries failures in-band as sentinel
/// strings; this type makes the success/failure split explicit, and
/// [`Transcription::from_raw`] keeps the string form parseable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transcription {
    /// Recognized text, in original case.
    Text(String),
    /// The audio carried no recognizable speech.
    Unintelligible,
    /// The transcription service could not be reached or answered with an
    /// error; carries the underlying description.
    RequestFailed(String),
}

impl Transcription {
    /// Parses a raw collaborator string, mapping the two recognized failure
    /// sentinels to their variants.
    ///
    /// A genuine transcript that happens to spell a sentinel is parsed as
    /// that failure; the string form cannot tell the two apart. Callers
    /// holding real text construct [`Transcription::Text`] directly and
    /// never hit the ambiguity.
    pub fn from_raw(raw: &str) -> Self {
        if raw == UNINTELLIGIBLE_SENTINEL {
            Transcription::Unintelligible
        } else if let Some(rest) = raw.strip_prefix(REQUEST_FAILED_SENTINEL) {
            let detail = rest.strip_prefix("; ").unwrap_or(rest);
            Transcription::RequestFailed(detail.to_string())
        } else {
            Transcription::Text(raw.to_string())
        }
    }

    /// The transcribed text, when this outcome carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Transcription::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True when a non-empty transcript is available.
    pub fn is_usable(&self) -> bool {
        self.text().is_some_and(|text| !text.is_empty())
    }
}

/// Whether a raw collaborator string is one of the recognized failure
/// sentinels.
pub fn is_failure_sentinel(raw: &str) -> bool {
    raw == UNINTELLIGIBLE_SENTINEL || raw.starts_with(REQUEST_FAILED_SENTINEL)
}
