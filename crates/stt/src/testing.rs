//! Test doubles for the transcoder and recognizer seams

use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{
    error::{Result, SttError},
    normalize::{TargetFormat, Transcoder},
    provider::Recognizer,
    types::{Alternative, RecognitionRequest, RecognitionSegment},
};

/// Encode a short 16-bit PCM WAV file in memory
pub(crate) fn wav_bytes(sample_rate: u32, channels: u16) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    for i in 0..160_i16 {
        for _ in 0..channels {
            writer.write_sample(i * 100).unwrap();
        }
    }
    writer.finalize().unwrap();

    cursor.into_inner()
}

/// Sorted list of regular files directly under `dir`
pub(crate) fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok().map(|e| e.path())).collect())
        .unwrap_or_default();
    files.sort();
    files
}

#[derive(Debug, Clone)]
pub(crate) struct TranscodeCall {
    pub input: PathBuf,
    pub input_bytes: Vec<u8>,
    pub output: PathBuf,
    pub target: TargetFormat,
}

/// Transcoder that writes a silent WAV in the requested format
#[derive(Default)]
pub(crate) struct FakeTranscoder {
    fail: bool,
    calls: Mutex<Vec<TranscodeCall>>,
}

impl FakeTranscoder {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<TranscodeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcoder for FakeTranscoder {
    async fn transcode(&self, input: &Path, output: &Path, target: TargetFormat) -> Result<()> {
        self.calls.lock().unwrap().push(TranscodeCall {
            input: input.to_path_buf(),
            input_bytes: std::fs::read(input).unwrap_or_default(),
            output: output.to_path_buf(),
            target,
        });

        if self.fail {
            // Leave a partial output behind, like an interrupted encoder would
            std::fs::write(output, b"RIFF").unwrap();
            return Err(SttError::Transcode("fake transcoder failure".to_string()));
        }

        std::fs::write(output, wav_bytes(target.sample_rate, target.channels)).unwrap();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RecognizeCall {
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub language_code: String,
    pub audio_len: usize,
    /// Files present in the watched directory during the call
    pub files_during_call: Vec<PathBuf>,
}

/// Recognizer returning scripted segments, or failing
pub(crate) struct FakeRecognizer {
    transcripts: Vec<Vec<String>>,
    fail: bool,
    watch_dir: Option<PathBuf>,
    calls: Mutex<Vec<RecognizeCall>>,
}

impl FakeRecognizer {
    /// One segment per entry, each holding the given alternatives
    pub fn returning(segments: &[&[&str]]) -> Self {
        Self {
            transcripts: segments
                .iter()
                .map(|alternatives| alternatives.iter().map(|a| (*a).to_string()).collect())
                .collect(),
            fail: false,
            watch_dir: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(&[])
        }
    }

    /// Record the contents of `dir` on every call
    pub fn watching(mut self, dir: &Path) -> Self {
        self.watch_dir = Some(dir.to_path_buf());
        self
    }

    pub fn calls(&self) -> Vec<RecognizeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Recognizer for FakeRecognizer {
    async fn recognize(&self, request: RecognitionRequest) -> Result<Vec<RecognitionSegment>> {
        self.calls.lock().unwrap().push(RecognizeCall {
            sample_rate_hz: request.sample_rate_hz,
            channels: request.channels,
            language_code: request.language_code.clone(),
            audio_len: request.audio.len(),
            files_during_call: self.watch_dir.as_deref().map(files_in).unwrap_or_default(),
        });

        if self.fail {
            return Err(SttError::Recognition("fake recognizer failure".to_string()));
        }

        Ok(self
            .transcripts
            .iter()
            .map(|alternatives| RecognitionSegment {
                alternatives: alternatives
                    .iter()
                    .map(|transcript| Alternative {
                        transcript: transcript.clone(),
                        confidence: 0.9,
                    })
                    .collect(),
            })
            .collect())
    }

    fn name(&self) -> &str {
        "fake"
    }
}
