//! Calendar arithmetic on plain dates.
//!
//! Month and year offsets clamp the day of month to the last valid day of the
//! target month. They never roll over into the following month, so
//! `2019-01-31 + 1 month` is `2019-02-28`, not `2019-03-03`.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{MockDateError, Result};
use crate::expr::TimeUnit;

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}

/// Number of days in `month` (1-12) of `year`. Zero for a month or year
/// chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| last_day_of_month(first).day())
        .unwrap_or(0)
}

/// Shift `date` by `n` days (negative moves into the past).
pub fn add_days(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.ok_or_else(|| out_of_range(date, n, TimeUnit::Day))
}

/// Shift `date` by `n` months, clamping the day of month.
pub fn add_months(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let months = u32::try_from(n.unsigned_abs())
        .map(Months::new)
        .map_err(|_| out_of_range(date, n, TimeUnit::Month))?;
    let shifted = if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.ok_or_else(|| out_of_range(date, n, TimeUnit::Month))
}

/// Shift `date` by `n` years. Feb 29 lands on Feb 28 in a common year.
pub fn add_years(date: NaiveDate, n: i64) -> Result<NaiveDate> {
    let months = n
        .checked_mul(12)
        .ok_or_else(|| out_of_range(date, n, TimeUnit::Year))?;
    add_months(date, months).map_err(|_| out_of_range(date, n, TimeUnit::Year))
}

/// Shift `date` by `n` of `unit`.
pub fn shift(date: NaiveDate, unit: TimeUnit, n: i64) -> Result<NaiveDate> {
    match unit {
        TimeUnit::Day => add_days(date, n),
        TimeUnit::Month => add_months(date, n),
        TimeUnit::Year => add_years(date, n),
    }
}

/// First day of the `unit` containing `date`. Days have no finer grain, so
/// the day boundary is the date itself.
pub fn beginning_of(date: NaiveDate, unit: TimeUnit) -> NaiveDate {
    match unit {
        TimeUnit::Day => date,
        TimeUnit::Month => date.with_day(1).unwrap_or(date),
        TimeUnit::Year => date.with_ordinal(1).unwrap_or(date),
    }
}

/// Last day of the `unit` containing `date`.
pub fn end_of(date: NaiveDate, unit: TimeUnit) -> NaiveDate {
    match unit {
        TimeUnit::Day => date,
        TimeUnit::Month => last_day_of_month(date),
        TimeUnit::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
    }
}

/// The day before the first of the following month.
fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_next| first_next.pred_opt())
        // Only December of the last representable year has no successor month.
        .unwrap_or_else(|| date.with_day(31).unwrap_or(date))
}

fn out_of_range(date: NaiveDate, n: i64, unit: TimeUnit) -> MockDateError {
    let count = n.unsigned_abs();
    let unit = if count == 1 {
        unit.singular()
    } else {
        unit.plural()
    };
    let direction = if n < 0 { "ago" } else { "from now" };
    MockDateError::OutOfRange(format!(
        "{} {} {} is outside the supported calendar (reference {})",
        count, unit, direction, date
    ))
}
