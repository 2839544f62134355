pub(crate) mod google;

use async_trait::async_trait;

/// Remote text translation service
#[async_trait]
pub(crate) trait Translator: Send + Sync {
    /// Translate `text` into `target`; `source` of `None` asks the
    /// provider to detect the language
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> crate::error::Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
