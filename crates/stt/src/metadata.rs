use std::io::Cursor;

use crate::error::{Result, SttError};

/// Format facts read from a WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AudioMetadata {
    pub sample_rate: u32,
    pub channels: u16,
}

/// Read the WAV header of `bytes`
///
/// The sample rate sent to the recognizer always comes from here; client
/// supplied rates are never trusted.
pub(crate) fn read_wav_metadata(bytes: &[u8]) -> Result<AudioMetadata> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).map_err(|e| {
        tracing::warn!("Failed to parse WAV header: {e}");
        SttError::InvalidAudio(e.to_string())
    })?;

    let spec = reader.spec();

    tracing::debug!(
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bits_per_sample = spec.bits_per_sample,
        "read audio metadata"
    );

    Ok(AudioMetadata {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}
