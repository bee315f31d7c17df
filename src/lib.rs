//! weekdays - locale-aware weekday names
//!
//! This crate produces the seven weekday labels a calendar or date picker
//! needs: in any supported locale, in full, abbreviated or minimal style,
//! starting on any day of the week, with optional case transformation.
//!
//! ```no_run
//! use weekdays::{weekdays, CasePolicy, WeekdayStyle, WeekdaysOptions};
//!
//! let opts = WeekdaysOptions::default()
//!     .with_locales("de-DE")
//!     .with_style(WeekdayStyle::Abbreviated)
//!     .with_first(chrono::Weekday::Mon)
//!     .with_case(CasePolicy::Upper);
//! assert_eq!(weekdays(&opts), ["MO", "DI", "MI", "DO", "FR", "SA", "SO"]);
//! ```

pub mod calendar;
pub mod clock;
pub mod error;
pub mod options;

mod formatter;
mod generator;
mod locale;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::OptionsError;
pub use formatter::{BuiltinFormatter, LocaleTextFormatter};
pub use generator::{Week, WeekdayGenerator};
pub use locale::ResolvedLocale;
pub use options::{CasePolicy, FirstDay, Locales, WeekdayStyle, WeekdaysOptions};

/// Generate weekday labels with the builtin formatter and the system clock.
pub fn weekdays(opts: &WeekdaysOptions) -> Week {
    WeekdayGenerator::new().generate(opts)
}

/// Generate full weekday names in the host locale, starting on Sunday.
pub fn weekdays_default() -> Week {
    weekdays(&WeekdaysOptions::default())
}
