//! Weekday name generation.

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::calendar::week_dates;
use crate::clock::{Clock, SystemClock};
use crate::formatter::{BuiltinFormatter, LocaleTextFormatter};
use crate::options::{CasePolicy, WeekdaysOptions};

/// Seven weekday labels; index 0 is the configured first day.
pub type Week = [String; 7];

/// Generates weekday labels from a formatter and a clock.
#[derive(Debug, Clone, Default)]
pub struct WeekdayGenerator<F = BuiltinFormatter, C = SystemClock> {
    formatter: F,
    clock: C,
}

impl WeekdayGenerator {
    /// A generator using the builtin formatter and the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F, C> WeekdayGenerator<F, C>
where
    F: LocaleTextFormatter,
    C: Clock,
{
    /// A generator with a custom formatter and clock.
    pub fn with_parts(formatter: F, clock: C) -> Self {
        WeekdayGenerator { formatter, clock }
    }

    /// The formatter used for names and case mapping.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Generate the week described by `opts`.
    ///
    /// Reads the clock once. Unsupported locales are skipped by the
    /// formatter, so this never fails.
    pub fn generate(&self, opts: &WeekdaysOptions) -> Week {
        let today = self.clock.today();
        let dates = week_dates(today, opts.first);
        let locale = self.formatter.resolve(&opts.locales);

        trace!(
            %today,
            anchor = %dates[0],
            style = %opts.style,
            case = %opts.case,
            "generating weekdays"
        );

        dates.map(|date| {
            let label = self.formatter.format_weekday(date, opts.style, &locale);
            self.apply_case(label, opts.case, &locale)
        })
    }

    fn apply_case(&self, label: String, case: CasePolicy, locale: &F::Locale) -> String {
        match case {
            CasePolicy::Native => label,
            CasePolicy::Upper => self.formatter.to_upper(&label, locale),
            CasePolicy::Lower => self.formatter.to_lower(&label, locale),
            CasePolicy::Capitalized => {
                let Some(first) = label.graphemes(true).next() else {
                    return label;
                };
                let rest = &label[first.len()..];
                let mut capitalized = self.formatter.to_upper(first, locale);
                capitalized.push_str(rest);
                capitalized
            }
        }
    }
}
