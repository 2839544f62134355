use std::{
    path::{Path, PathBuf},
    process::Stdio,
    sync::Arc,
};

use async_trait::async_trait;

use crate::{
    artifact::TempArtifact,
    error::{Result, SttError},
    types::AudioContainer,
};

/// Output format produced by normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// Converts an audio file into a PCM WAV file
#[async_trait]
pub(crate) trait Transcoder: Send + Sync {
    /// Write `input` to `output` as PCM WAV in the `target` format
    async fn transcode(&self, input: &Path, output: &Path, target: TargetFormat) -> Result<()>;
}

/// Transcoder backed by an `ffmpeg` executable
pub(crate) struct FfmpegTranscoder {
    binary: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path, target: TargetFormat) -> Result<()> {
        tracing::debug!(
            input = %input.display(),
            sample_rate = target.sample_rate,
            channels = target.channels,
            "running ffmpeg"
        );

        let result = tokio::process::Command::new(&self.binary)
            .args(["-hide_banner", "-loglevel", "error", "-nostdin", "-y", "-i"])
            .arg(input)
            .args(["-ac", &target.channels.to_string()])
            .args(["-ar", &target.sample_rate.to_string()])
            .args(["-c:a", "pcm_s16le", "-f", "wav"])
            .arg(output)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                tracing::error!("Failed to run {}: {e}", self.binary.display());
                SttError::Transcode(format!("failed to run {}: {e}", self.binary.display()))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            tracing::error!("ffmpeg exited with {}: {}", result.status, stderr.trim());
            return Err(SttError::Transcode(format!("ffmpeg exited with {}", result.status)));
        }

        Ok(())
    }
}

/// Converts streaming-container uploads into mono PCM WAV
pub(crate) struct Normalizer {
    transcoder: Arc<dyn Transcoder>,
    target: TargetFormat,
    temp_dir: PathBuf,
}

impl Normalizer {
    pub fn new(transcoder: Arc<dyn Transcoder>, target: TargetFormat, temp_dir: PathBuf) -> Self {
        Self {
            transcoder,
            target,
            temp_dir,
        }
    }

    pub const fn target(&self) -> TargetFormat {
        self.target
    }

    /// Transcode an upload to WAV
    ///
    /// The upload is staged in a temporary file that is gone by the time
    /// this returns, on every path. The returned artifact belongs to the
    /// caller.
    pub async fn normalize(&self, audio: &[u8], container: AudioContainer) -> Result<TempArtifact> {
        let input = TempArtifact::reserve(&self.temp_dir, container.extension());

        tokio::fs::write(input.path(), audio).await.map_err(|e| {
            tracing::error!("Failed to stage upload at {}: {e}", input.path().display());
            SttError::Transcode(format!("failed to stage upload: {e}"))
        })?;

        let output = TempArtifact::reserve(&self.temp_dir, AudioContainer::Wav.extension());

        let outcome = self.transcoder.transcode(input.path(), output.path(), self.target).await;
        input.remove().await;

        if let Err(e) = outcome {
            output.remove().await;
            return Err(e);
        }

        Ok(output)
    }
}
