//! BCP-47 language code validation shared by the translate and stt crates

use std::fmt;

use language_tags::LanguageTag;

/// Longest language code accepted in any request field
pub const MAX_LANGUAGE_CODE_LEN: usize = 6;

/// Which side of a request a language code describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    /// Language of the input text or audio
    Source,
    /// Language the caller wants back
    Target,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Rejection reasons for a language code field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageCodeError {
    /// Not well-formed, or uses subtags missing from the IANA registry
    #[error("Invalid {role} language code: {value}")]
    Invalid { role: LanguageRole, value: String },

    /// Valid tag, but longer than the field allows
    #[error("Ensure this field has no more than {} characters.", MAX_LANGUAGE_CODE_LEN)]
    TooLong,
}

/// Check that `tag` is well-formed BCP-47 and every subtag is registered
pub fn is_valid_tag(tag: &str) -> bool {
    LanguageTag::parse(tag).is_ok_and(|parsed| parsed.validate().is_ok())
}

/// Validate a language code field
///
/// The registry check runs before the length check so that a malformed
/// value is always echoed back to the caller.
///
/// # Errors
///
/// Returns [`LanguageCodeError::Invalid`] for malformed or unregistered tags
/// and [`LanguageCodeError::TooLong`] for tags over [`MAX_LANGUAGE_CODE_LEN`]
pub fn validate_language_code(value: &str, role: LanguageRole) -> Result<(), LanguageCodeError> {
    if !is_valid_tag(value) {
        return Err(LanguageCodeError::Invalid {
            role,
            value: value.to_string(),
        });
    }

    if value.chars().count() > MAX_LANGUAGE_CODE_LEN {
        return Err(LanguageCodeError::TooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_tags() {
        for tag in ["en", "en-US", "es-ES", "ar", "fr-CA", "de"] {
            assert!(is_valid_tag(tag), "{tag} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "en_US", "-en", "en-", "123"] {
            assert!(!is_valid_tag(tag), "{tag:?} should be invalid");
        }
    }

    #[test]
    fn rejects_unregistered_subtags() {
        assert!(!is_valid_tag("xx-zz-invalid"));
    }

    #[test]
    fn invalid_tag_is_echoed_with_role() {
        let err = validate_language_code("xx-zz-invalid", LanguageRole::Target).unwrap_err();
        assert_eq!(err.to_string(), "Invalid target language code: xx-zz-invalid");

        let err = validate_language_code("en_GB", LanguageRole::Source).unwrap_err();
        assert_eq!(err.to_string(), "Invalid source language code: en_GB");
    }

    #[test]
    fn long_valid_tag_hits_length_limit() {
        let err = validate_language_code("zh-Hant-TW", LanguageRole::Target).unwrap_err();
        assert_eq!(err, LanguageCodeError::TooLong);
        assert_eq!(err.to_string(), "Ensure this field has no more than 6 characters.");
    }

    #[test]
    fn short_valid_tag_passes() {
        assert!(validate_language_code("en-US", LanguageRole::Target).is_ok());
    }
}
