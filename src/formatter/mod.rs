//! Locale text formatting capability.
//!
//! The generator never touches locale data directly. Everything
//! language-specific (resolving tags, naming a day, case mapping) goes
//! through [`LocaleTextFormatter`], so hosts can plug in another locale
//! engine without changing the week arithmetic.

mod builtin;

pub use builtin::BuiltinFormatter;

use chrono::NaiveDate;

use crate::options::{Locales, WeekdayStyle};

/// Produces locale-correct weekday labels and case mappings.
pub trait LocaleTextFormatter {
    /// A resolved locale handle, produced once per generated week.
    type Locale;

    /// Pick the first supported locale from `locales`, falling back to the
    /// formatter's ambient default. Never fails.
    fn resolve(&self, locales: &Locales) -> Self::Locale;

    /// The weekday label of `date` in the given style.
    fn format_weekday(&self, date: NaiveDate, style: WeekdayStyle, locale: &Self::Locale)
        -> String;

    fn to_upper(&self, text: &str, locale: &Self::Locale) -> String;

    fn to_lower(&self, text: &str, locale: &Self::Locale) -> String;
}

impl<F: LocaleTextFormatter + ?Sized> LocaleTextFormatter for &F {
    type Locale = F::Locale;

    fn resolve(&self, locales: &Locales) -> Self::Locale {
        (**self).resolve(locales)
    }

    fn format_weekday(
        &self,
        date: NaiveDate,
        style: WeekdayStyle,
        locale: &Self::Locale,
    ) -> String {
        (**self).format_weekday(date, style, locale)
    }

    fn to_upper(&self, text: &str, locale: &Self::Locale) -> String {
        (**self).to_upper(text, locale)
    }

    fn to_lower(&self, text: &str, locale: &Self::Locale) -> String {
        (**self).to_lower(text, locale)
    }
}
