use parley_core::{LanguageRole, validate_language_code};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};

/// Translation request body
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRequest {
    pub source_text: String,
    /// Required, but may be empty to let the provider detect the language
    pub source_language_code: String,
    pub target_language_code: String,
}

impl TranslationRequest {
    /// Strip surrounding whitespace from every field
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            source_text: self.source_text.trim().to_string(),
            source_language_code: self.source_language_code.trim().to_string(),
            target_language_code: self.target_language_code.trim().to_string(),
        }
    }

    /// Check fields in declaration order, stopping at the first failure
    pub fn validate(&self) -> Result<()> {
        if self.source_text.trim().is_empty() {
            return Err(TranslateError::InvalidRequest(
                "This field may not be blank.".to_string(),
            ));
        }

        if !self.source_language_code.is_empty() {
            validate_language_code(&self.source_language_code, LanguageRole::Source)?;
        }

        validate_language_code(&self.target_language_code, LanguageRole::Target)?;

        Ok(())
    }

    /// Source language, or `None` when it should be detected
    pub fn source_language(&self) -> Option<&str> {
        Some(self.source_language_code.as_str()).filter(|code| !code.is_empty())
    }
}

/// Translation response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}
