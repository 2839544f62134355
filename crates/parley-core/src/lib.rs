//! Shared building blocks for the Parley feature crates

#![allow(clippy::must_use_candidate)]

mod error;
pub mod language;

pub use error::{ErrorBody, ErrorDetails, HttpError};
pub use language::{LanguageCodeError, LanguageRole, MAX_LANGUAGE_CODE_LEN, is_valid_tag, validate_language_code};
