//! Locale-sensitive case mapping.

use icu_casemap::CaseMapper;
use icu_locale::LanguageIdentifier;

/// Uppercase `text` following the casing rules of `langid`
/// (Turkish "i" becomes "İ").
pub fn uppercase(text: &str, langid: &LanguageIdentifier) -> String {
    CaseMapper::new().uppercase_to_string(text, langid).into()
}

/// Lowercase `text` following the casing rules of `langid`.
pub fn lowercase(text: &str, langid: &LanguageIdentifier) -> String {
    CaseMapper::new().lowercase_to_string(text, langid).into()
}
