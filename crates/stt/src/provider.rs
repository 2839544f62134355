pub(crate) mod google;

use async_trait::async_trait;

use crate::types::{RecognitionRequest, RecognitionSegment};

/// Remote speech recognition service
#[async_trait]
pub(crate) trait Recognizer: Send + Sync {
    /// Recognize speech in PCM audio
    ///
    /// Segments come back in chronological order, each with its
    /// alternatives ranked best first.
    async fn recognize(&self, request: RecognitionRequest) -> crate::error::Result<Vec<RecognitionSegment>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
