//! Calendar arithmetic for locating the days of a week.
//!
//! All arithmetic is done on [`NaiveDate`], so month and year boundaries are
//! carried correctly and daylight-saving transitions never shift a day.

use chrono::{Datelike, Days, NaiveDate};

use crate::options::FirstDay;

/// Moves `date` by a signed number of days, `None` outside chrono's range.
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Offset in days from `today` to the first day of the requested week.
///
/// The week containing `today` runs Sunday..Saturday, so a fixed first day
/// may land up to six days before or after `today`.
pub fn anchor_offset(today: NaiveDate, first: FirstDay) -> i64 {
    match first {
        FirstDay::Current => 0,
        FirstDay::Weekday(day) => {
            i64::from(day.num_days_from_sunday()) - i64::from(today.weekday().num_days_from_sunday())
        }
    }
}

/// Resolve the first date of the generated week.
///
/// Near the ends of the representable range the window is moved by whole
/// weeks so that all seven days exist. The weekday of the anchor never changes.
pub fn anchor_date(today: NaiveDate, first: FirstDay) -> NaiveDate {
    let mut offset = anchor_offset(today, first);

    if shift(today, offset + 6).is_none() {
        offset -= 7;
    }
    if shift(today, offset).is_none() {
        offset += 7;
    }

    shift(today, offset).unwrap_or(today)
}

/// The seven consecutive dates starting at the resolved first day.
pub fn week_dates(today: NaiveDate, first: FirstDay) -> [NaiveDate; 7] {
    let anchor = anchor_date(today, first);
    let mut days = anchor.iter_days();
    std::array::from_fn(|_| days.next().unwrap_or(anchor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchor_offset() {
        // 2025-10-22 is a Wednesday
        let wed = date(2025, 10, 22);
        assert_eq!(anchor_offset(wed, FirstDay::Weekday(Weekday::Sun)), -3);
        assert_eq!(anchor_offset(wed, FirstDay::Weekday(Weekday::Sat)), 3);
        assert_eq!(anchor_offset(wed, FirstDay::Weekday(Weekday::Wed)), 0);
        assert_eq!(anchor_offset(wed, FirstDay::Current), 0);
    }

    #[test]
    fn test_anchor_crosses_year_boundary() {
        // 2026-01-01 is a Thursday; the previous Sunday is in 2025
        let new_year = date(2026, 1, 1);
        assert_eq!(
            anchor_date(new_year, FirstDay::Weekday(Weekday::Sun)),
            date(2025, 12, 28)
        );
    }

    #[test]
    fn test_anchor_crosses_month_boundary_forward() {
        // 2024-02-28 is a Wednesday; Saturday of that week is March 2nd (leap year)
        assert_eq!(
            anchor_date(date(2024, 2, 28), FirstDay::Weekday(Weekday::Sat)),
            date(2024, 3, 2)
        );
    }

    #[test]
    fn test_week_dates_are_consecutive() {
        let week = week_dates(date(2025, 12, 30), FirstDay::Weekday(Weekday::Mon));
        assert_eq!(week[0], date(2025, 12, 29));
        assert_eq!(week[6], date(2026, 1, 4));
        for pair in week.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_week_dates_near_max_date() {
        let week = week_dates(NaiveDate::MAX, FirstDay::Current);
        // the window moves back a whole week so all seven days fit
        assert_eq!(week[6], NaiveDate::MAX.pred_opt().unwrap());
        assert_eq!(week[0].weekday(), NaiveDate::MAX.weekday());
        for pair in week.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_week_dates_near_min_date() {
        let week = week_dates(NaiveDate::MIN, FirstDay::Weekday(Weekday::Sun));
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert!(week[0] >= NaiveDate::MIN);
    }
}
