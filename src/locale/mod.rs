//! Locale resolution and locale-sensitive casing.
//!
//! Tags are BCP-47 identifiers ("de-DE", "fr-CH", "ar"). Weekday names come
//! from chrono's locale tables, which are keyed by POSIX names ("de_DE"), so
//! each tag is mapped onto the closest POSIX locale chrono knows about:
//!
//! 1. `<lang>_<REGION>` when the tag carries a region,
//! 2. `<lang>_<REGION>` for the region the likely-subtags data assigns to
//!    the language and script ("ar" becomes "ar_EG", "es-419" falls back
//!    to "es_ES"),
//! 3. the bare language.
//!
//! A script that is not the language's default selects the glibc modifier
//! ("sr-Latn" becomes "sr_RS@latin"). Macrolanguages with no data of their
//! own are retried under their individual language ("no" as "nb").

mod casing;

pub use casing::{lowercase, uppercase};

use chrono::Locale as DataLocale;
use icu_locale::subtags::{Region, Script};
use icu_locale::{LanguageIdentifier, LocaleExpander};
use tracing::debug;

/// glibc locale modifiers that select a script.
const SCRIPT_MODIFIERS: [(&str, &str); 3] = [
    ("Latn", "latin"),
    ("Cyrl", "cyrillic"),
    ("Deva", "devanagari"),
];

/// Macrolanguages whose data is filed under an individual language.
const MACROLANGUAGES: [(&str, &str); 1] = [("no", "nb")];

/// A locale chrono has weekday data for, together with the language used
/// for case mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocale {
    langid: LanguageIdentifier,
    data: DataLocale,
}

impl ResolvedLocale {
    /// The POSIX fallback: English names, language-neutral casing.
    pub fn posix() -> Self {
        ResolvedLocale {
            langid: LanguageIdentifier::UNKNOWN,
            data: DataLocale::POSIX,
        }
    }

    /// Resolve a single tag, `None` if no locale data matches it.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let langid = parse_tag(tag)?;
        let data = candidate_names(&langid)
            .into_iter()
            .find_map(|name| DataLocale::try_from(name.as_str()).ok())?;
        Some(ResolvedLocale { langid, data })
    }

    /// Resolve the first supported tag in preference order.
    pub fn first_supported<'a, I>(tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().find_map(|tag| match Self::from_tag(tag) {
            Some(resolved) => {
                debug!(tag, locale = ?resolved.data, "resolved locale");
                Some(resolved)
            }
            None => {
                debug!(tag, "unsupported locale, trying next candidate");
                None
            }
        })
    }

    /// The language identifier used for case mapping.
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.langid
    }

    /// The chrono locale supplying weekday names.
    pub fn data_locale(&self) -> DataLocale {
        self.data
    }
}

/// Parse a BCP-47 tag, tolerating POSIX spellings such as "de_DE.UTF-8"
/// and "sr_RS@latin". Unicode extensions are accepted and dropped.
fn parse_tag(tag: &str) -> Option<LanguageIdentifier> {
    let tag = tag.trim();
    let (tag, modifier) = match tag.split_once('@') {
        Some((tag, modifier)) => (tag, Some(modifier)),
        None => (tag, None),
    };
    let tag = tag.split('.').next().unwrap_or(tag);
    if tag.is_empty() {
        return None;
    }

    let mut langid = icu_locale::Locale::try_from_str(&tag.replace('_', "-")).ok()?.id;
    if langid.script.is_none() {
        langid.script = modifier.and_then(script_for_modifier);
    }
    Some(langid)
}

fn script_for_modifier(modifier: &str) -> Option<Script> {
    SCRIPT_MODIFIERS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(modifier))
        .and_then(|(script, _)| Script::try_from_str(script).ok())
}

/// The glibc modifier for `langid`'s script, if it differs from the
/// language's default script.
fn script_modifier(
    langid: &LanguageIdentifier,
    expander: &LocaleExpander,
) -> Option<&'static str> {
    let script = langid.script?;

    let mut default = LanguageIdentifier::UNKNOWN;
    default.language = langid.language;
    expander.maximize(&mut default);
    if default.script == Some(script) {
        return None;
    }

    SCRIPT_MODIFIERS
        .iter()
        .find(|(code, _)| *code == script.as_str())
        .map(|(_, modifier)| *modifier)
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

/// POSIX locale names to try for `langid`, most specific first.
fn candidate_names(langid: &LanguageIdentifier) -> Vec<String> {
    let expander = LocaleExpander::new_extended();

    let mut regions: Vec<Region> = langid.region.into_iter().collect();
    // The likely region ignores the requested one, which may have no data
    // ("es-419", "fr-US").
    let mut likely = langid.clone();
    likely.region = None;
    expander.maximize(&mut likely);
    if let Some(region) = likely.region {
        if !regions.contains(&region) {
            regions.push(region);
        }
    }

    let modifier = script_modifier(langid, &expander);

    let language = langid.language.as_str();
    let mut languages = vec![language];
    languages.extend(
        MACROLANGUAGES
            .iter()
            .filter(|(macro_language, _)| *macro_language == language)
            .map(|(_, individual)| *individual),
    );

    let mut names = Vec::new();
    for language in languages {
        for region in &regions {
            let base = format!("{}_{}", language, region.as_str());
            if let Some(modifier) = modifier {
                push_unique(&mut names, format!("{base}@{modifier}"));
            }
            push_unique(&mut names, base);
        }
        push_unique(&mut names, language.to_string());
    }
    names
}
