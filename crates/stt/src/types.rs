use serde::{Deserialize, Serialize};

/// Audio file as received in the multipart upload
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    /// Raw file bytes
    pub bytes: Vec<u8>,
    /// Client-declared filename
    pub filename: String,
    /// Client-declared content type
    pub content_type: Option<String>,
}

/// Parsed `POST /transcribe/` form
#[derive(Debug, Clone)]
pub struct TranscriptionForm {
    pub audio: UploadedAudio,
    /// BCP-47 tag of the spoken language
    pub language_code: String,
}

/// Upload containers accepted by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioContainer {
    /// RIFF/WAVE, passed to the recognizer as-is
    Wav,
    /// WebM, transcoded to WAV first
    Webm,
}

impl AudioContainer {
    /// Detect the container from a filename extension, ignoring case
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;

        match extension.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Webm => "webm",
        }
    }
}

/// Input to the remote recognizer
///
/// `sample_rate_hz` and `channels` always come from the audio header, never
/// from the client.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    pub audio: Vec<u8>,
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub language_code: String,
}

/// One chronological unit of recognized speech
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionSegment {
    /// Alternatives ordered from most to least likely
    pub alternatives: Vec<Alternative>,
}

/// A candidate transcription for a segment
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: f32,
}

/// `POST /transcribe/` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    #[serde(rename = "Transcript")]
    pub transcript: String,
}

impl TranscriptionResponse {
    /// Join the top alternative of every segment with single spaces
    ///
    /// Segments without alternatives contribute nothing.
    pub fn from_segments(segments: &[RecognitionSegment]) -> Self {
        let transcript = segments
            .iter()
            .filter_map(|segment| segment.alternatives.first())
            .map(|alternative| alternative.transcript.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self { transcript }
    }
}
