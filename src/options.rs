//! Weekday options and configuration.

use crate::error::OptionsError;
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// Verbosity of a weekday label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekdayStyle {
    /// Full name, e.g. "Monday"
    #[default]
    Full,
    /// Abbreviated name, e.g. "Mon"
    Abbreviated,
    /// A single grapheme, e.g. "M"
    Minimal,
}

impl FromStr for WeekdayStyle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "long" => Ok(WeekdayStyle::Full),
            "abbreviated" | "short" => Ok(WeekdayStyle::Abbreviated),
            "minimal" | "narrow" => Ok(WeekdayStyle::Minimal),
            _ => Err(OptionsError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for WeekdayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeekdayStyle::Full => "full",
            WeekdayStyle::Abbreviated => "abbreviated",
            WeekdayStyle::Minimal => "minimal",
        })
    }
}

/// Letter-casing applied to every label after formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CasePolicy {
    /// Keep whatever casing the locale data uses.
    #[default]
    Native,
    /// Uppercase the first grapheme, leave the rest untouched.
    Capitalized,
    /// Uppercase the whole label.
    Upper,
    /// Lowercase the whole label.
    Lower,
}

impl FromStr for CasePolicy {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(CasePolicy::Native),
            "capital" | "capitalized" => Ok(CasePolicy::Capitalized),
            "upper" | "uppercase" => Ok(CasePolicy::Upper),
            "lower" | "lowercase" => Ok(CasePolicy::Lower),
            _ => Err(OptionsError::UnknownCase(s.to_string())),
        }
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CasePolicy::Native => "native",
            CasePolicy::Capitalized => "capitalized",
            CasePolicy::Upper => "upper",
            CasePolicy::Lower => "lower",
        })
    }
}

/// Weekdays in Sunday-first index order.
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The day the generated week starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirstDay {
    /// A fixed weekday.
    Weekday(Weekday),
    /// Whatever day today is.
    Current,
}

impl FirstDay {
    /// Sunday-based index (0 = Sunday ... 6 = Saturday), `None` for [`FirstDay::Current`].
    pub fn index(&self) -> Option<u8> {
        match self {
            // num_days_from_sunday is always below 7
            FirstDay::Weekday(day) => Some(day.num_days_from_sunday() as u8),
            FirstDay::Current => None,
        }
    }
}

impl Default for FirstDay {
    fn default() -> Self {
        FirstDay::Weekday(Weekday::Sun)
    }
}

impl From<Weekday> for FirstDay {
    fn from(day: Weekday) -> Self {
        FirstDay::Weekday(day)
    }
}

impl TryFrom<u8> for FirstDay {
    type Error = OptionsError;

    /// Build from a Sunday-based index (0 = Sunday ... 6 = Saturday).
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        SUNDAY_FIRST
            .get(usize::from(index))
            .map(|day| FirstDay::Weekday(*day))
            .ok_or(OptionsError::FirstDayOutOfRange(index))
    }
}

impl FromStr for FirstDay {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("current") || trimmed.eq_ignore_ascii_case("today") {
            return Ok(FirstDay::Current);
        }
        if let Ok(index) = trimmed.parse::<u8>() {
            return FirstDay::try_from(index);
        }
        trimmed
            .parse::<Weekday>()
            .map(FirstDay::Weekday)
            .map_err(|_| OptionsError::InvalidFirstDay(s.to_string()))
    }
}

/// Locale selection, in preference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Locales {
    /// The host's default locale.
    #[default]
    Ambient,
    /// A single BCP-47 tag.
    One(String),
    /// Tags tried in order until one is supported.
    Preferred(Vec<String>),
}

impl Locales {
    /// The explicitly requested tags, empty for [`Locales::Ambient`].
    pub fn candidates(&self) -> &[String] {
        match self {
            Locales::Ambient => &[],
            Locales::One(tag) => std::slice::from_ref(tag),
            Locales::Preferred(tags) => tags,
        }
    }
}

impl From<&str> for Locales {
    fn from(tag: &str) -> Self {
        Locales::One(tag.to_string())
    }
}

impl From<String> for Locales {
    fn from(tag: String) -> Self {
        Locales::One(tag)
    }
}

impl<T: Into<String>> From<Vec<T>> for Locales {
    fn from(tags: Vec<T>) -> Self {
        Locales::Preferred(tags.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for Locales {
    fn from(tags: [T; N]) -> Self {
        Locales::Preferred(tags.into_iter().map(Into::into).collect())
    }
}

/// Options for generating weekday names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaysOptions {
    /// Label verbosity. Default: [`WeekdayStyle::Full`].
    pub style: WeekdayStyle,
    /// Casing applied to each label. Default: [`CasePolicy::Native`].
    pub case: CasePolicy,
    /// First day of the generated week. Default: Sunday.
    pub first: FirstDay,
    /// Locale preference. Default: [`Locales::Ambient`].
    pub locales: Locales,
}

impl WeekdaysOptions {
    pub fn with_style(mut self, style: WeekdayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_case(mut self, case: CasePolicy) -> Self {
        self.case = case;
        self
    }

    pub fn with_first(mut self, first: impl Into<FirstDay>) -> Self {
        self.first = first.into();
        self
    }

    pub fn with_locales(mut self, locales: impl Into<Locales>) -> Self {
        self.locales = locales.into();
        self
    }
}
