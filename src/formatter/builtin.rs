//! Formatter backed by chrono's locale tables and ICU case mapping.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::LocaleTextFormatter;
use crate::locale::{lowercase, uppercase, ResolvedLocale};
use crate::options::{Locales, WeekdayStyle};

/// The default [`LocaleTextFormatter`].
///
/// Full and abbreviated names come from chrono (`%A` / `%a`). The locale
/// tables have no narrow names, so [`WeekdayStyle::Minimal`] is the first
/// grapheme of the abbreviated name.
///
/// When none of the requested locales is supported the host locale is used,
/// and when that is unsupported too, POSIX (English) names.
#[derive(Debug, Clone, Default)]
pub struct BuiltinFormatter {
    default_tag: Option<String>,
}

impl BuiltinFormatter {
    /// A formatter falling back to the host locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `tag` instead of the host locale as the final fallback.
    pub fn with_default_locale(tag: impl Into<String>) -> Self {
        BuiltinFormatter {
            default_tag: Some(tag.into()),
        }
    }

    fn fallback_locale(&self) -> ResolvedLocale {
        let tag = self.default_tag.clone().or_else(sys_locale::get_locale);
        match tag.as_deref().and_then(ResolvedLocale::from_tag) {
            Some(resolved) => {
                debug!(tag = ?tag, locale = ?resolved.data_locale(), "using default locale");
                resolved
            }
            None => {
                debug!(tag = ?tag, "default locale unsupported, using POSIX");
                ResolvedLocale::posix()
            }
        }
    }
}

impl LocaleTextFormatter for BuiltinFormatter {
    type Locale = ResolvedLocale;

    fn resolve(&self, locales: &Locales) -> ResolvedLocale {
        let candidates = locales.candidates().iter().map(String::as_str);
        ResolvedLocale::first_supported(candidates).unwrap_or_else(|| self.fallback_locale())
    }

    fn format_weekday(
        &self,
        date: NaiveDate,
        style: WeekdayStyle,
        locale: &ResolvedLocale,
    ) -> String {
        let moment = date.and_time(NaiveTime::MIN).and_utc();
        let data = locale.data_locale();

        match style {
            WeekdayStyle::Full => moment.format_localized("%A", data).to_string(),
            WeekdayStyle::Abbreviated => moment.format_localized("%a", data).to_string(),
            WeekdayStyle::Minimal => {
                let short = moment.format_localized("%a", data).to_string();
                short.graphemes(true).next().unwrap_or_default().to_string()
            }
        }
    }

    fn to_upper(&self, text: &str, locale: &ResolvedLocale) -> String {
        uppercase(text, locale.language_identifier())
    }

    fn to_lower(&self, text: &str, locale: &ResolvedLocale) -> String {
        lowercase(text, locale.language_identifier())
    }
}
