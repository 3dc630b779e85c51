//! Expected-value placeholders as they appear in fixture tables.

use chrono::NaiveDate;
use mock_date::{evaluate, evaluate_with_clock, FixedClock};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference date used by most cases.
fn anchor() -> NaiveDate {
    date(2017, 7, 15)
}

fn check(phrase: &str, expected: &str) {
    check_at(anchor(), phrase, expected);
}

fn check_at(today: NaiveDate, phrase: &str, expected: &str) {
    let clock = FixedClock::new(today);
    let actual = evaluate_with_clock(phrase, &clock)
        .unwrap_or_else(|e| panic!("'{}' failed at {}: {}", phrase, today, e));
    assert_eq!(actual, expected, "phrase '{}' at {}", phrase, today);
}

// ── day placeholders ────────────────────────────────────────────────────

#[test]
fn sets_today_tomorrow_yesterday() {
    check("today", "2017-07-15");
    check("tomorrow", "2017-07-16");
    check("yesterday", "2017-07-14");
}

#[test]
fn travels_days() {
    check("10 days ago", "2017-07-05");
    check("30 days from now", "2017-08-14");
}

#[test]
fn converts_days() {
    check("10 days from now (as day)", "25");
    check("30 days from now (as month)", "8");
    check("30 days from now (as year)", "2017");
}

#[test]
fn day_boundaries() {
    check("beginning of day 10 days from now", "2017-07-25");
    check("end of day 10 days from now", "2017-07-25");
}

// ── month placeholders ──────────────────────────────────────────────────

#[test]
fn short_february() {
    check_at(date(2019, 3, 29), "last month", "2019-02-28");
    check_at(date(2019, 1, 29), "next month", "2019-02-28");
}

#[test]
fn months_of_different_length_keep_the_day() {
    check_at(date(2019, 3, 31), "2 month ago", "2019-01-31");
    check_at(date(2019, 3, 31), "2 months ago", "2019-01-31");
    check_at(date(2019, 1, 31), "2 months from now", "2019-03-31");
    check_at(
        date(2019, 1, 31),
        "beginning of month 9 months from now",
        "2019-10-01",
    );
    check_at(date(2019, 1, 31), "end of month 9 months from now", "2019-10-31");
}

#[test]
fn travels_months() {
    check("last month", "2017-06-15");
    check("next month", "2017-08-15");
    check("10 months ago", "2016-09-15");
    check("10 months from now", "2018-05-15");
}

#[test]
fn converts_months() {
    check("10 months from now (as day)", "15");
    check("10 months from now (as month)", "5");
    check("10 months from now (as year)", "2018");
}

#[test]
fn month_boundaries() {
    check("beginning of month 10 months from now", "2018-05-01");
    check("end of month 10 months from now", "2018-05-31");
}

// ── year placeholders ───────────────────────────────────────────────────

#[test]
fn travels_years() {
    check("last year", "2016-07-15");
    check("next year", "2018-07-15");
    check("10 years ago", "2007-07-15");
    check("10 years from now", "2027-07-15");
}

#[test]
fn converts_years() {
    check("10 years from now (as day)", "15");
    check("10 years from now (as month)", "7");
    check("10 years from now (as year)", "2027");
}

#[test]
fn year_boundaries() {
    check("beginning of year 10 months from now", "2018-01-01");
    check("end of year 10 months from now", "2018-12-31");
}

// ── custom format ───────────────────────────────────────────────────────

#[test]
fn custom_format() {
    check("today (as custom '%Y/%m/%d')", "2017/07/15");
}

#[test]
fn reference_date_is_read_per_call() {
    assert_eq!(evaluate("today", date(2017, 7, 15)).unwrap(), "2017-07-15");
    assert_eq!(evaluate("today", date(2019, 3, 29)).unwrap(), "2019-03-29");
}
