//! Cheap request checks that run before any file or network work

use parley_core::{LanguageRole, validate_language_code};

use crate::{
    error::{Result, SttError},
    types::{AudioContainer, TranscriptionForm},
};

/// Validate the upload's extension and language code
///
/// Returns the container that decides whether normalization runs.
pub(crate) fn validate(form: &TranscriptionForm) -> Result<AudioContainer> {
    let container = AudioContainer::from_filename(&form.audio.filename)
        .ok_or_else(|| SttError::InvalidRequest("Only WAV or WEBM files are allowed.".to_string()))?;

    validate_language_code(&form.language_code, LanguageRole::Target)?;

    Ok(container)
}
