//! Property tests over arbitrary reference dates.

use chrono::{Datelike, NaiveDate};
use mock_date::calendar::days_in_month;
use mock_date::evaluate;
use proptest::prelude::*;

/// Dates between 1900-01-01 and 2199-12-31.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d.min(days_in_month(y, m))).unwrap()
    })
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

proptest! {
    #[test]
    fn today_is_identity(d in any_date()) {
        prop_assert_eq!(evaluate("today", d).unwrap(), d.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn days_round_trip(d in any_date(), n in 0u32..5000) {
        let forward = evaluate(&format!("{} days from now", n), d).unwrap();
        let back = evaluate(&format!("{} days ago", n), parse_date(&forward)).unwrap();
        prop_assert_eq!(parse_date(&back), d);
    }

    #[test]
    fn months_round_trip_when_day_fits(d in any_date(), n in 0u32..240) {
        let forward = parse_date(&evaluate(&format!("{} months from now", n), d).unwrap());
        let back = parse_date(&evaluate(&format!("{} months ago", n), forward).unwrap());
        // Clamping makes the forward step lossy only when the day did not fit.
        if forward.day() == d.day() {
            prop_assert_eq!(back, d);
        } else {
            prop_assert_eq!(forward.day(), days_in_month(forward.year(), forward.month()));
        }
    }

    #[test]
    fn years_round_trip_when_day_fits(d in any_date(), n in 0u32..200) {
        let forward = parse_date(&evaluate(&format!("{} years from now", n), d).unwrap());
        let back = parse_date(&evaluate(&format!("{} years ago", n), forward).unwrap());
        // Only a leap day can be lost, landing on Feb 28 of a common year.
        if back != d {
            prop_assert_eq!((d.month(), d.day()), (2, 29));
            prop_assert_eq!((forward.month(), forward.day()), (2, 28));
            prop_assert!(!forward.leap_year());
        }
    }

    #[test]
    fn month_offsets_never_roll_over(d in any_date(), n in 0u32..240) {
        let forward = parse_date(&evaluate(&format!("{} months from now", n), d).unwrap());
        let months = i64::from(d.year()) * 12 + i64::from(d.month0()) + i64::from(n);
        prop_assert_eq!(i64::from(forward.year()) * 12 + i64::from(forward.month0()), months);
    }

    #[test]
    fn beginning_of_month_is_day_one(d in any_date(), n in 0u32..120) {
        let out = evaluate(&format!("beginning of month {} months ago", n), d).unwrap();
        prop_assert_eq!(parse_date(&out).day(), 1);
    }

    #[test]
    fn end_of_month_is_last_day(d in any_date(), n in 0u32..120) {
        let out = parse_date(&evaluate(&format!("end of month {} months from now", n), d).unwrap());
        prop_assert_eq!(out.day(), days_in_month(out.year(), out.month()));
        prop_assert!(out.succ_opt().unwrap().day() == 1);
    }

    #[test]
    fn extraction_matches_full_date(d in any_date(), n in 0u32..1000) {
        let phrase = format!("{} days ago", n);
        let full = parse_date(&evaluate(&phrase, d).unwrap());
        prop_assert_eq!(evaluate(&format!("{} (as day)", phrase), d).unwrap(), full.day().to_string());
        prop_assert_eq!(evaluate(&format!("{} (as month)", phrase), d).unwrap(), full.month().to_string());
        prop_assert_eq!(evaluate(&format!("{} (as year)", phrase), d).unwrap(), full.year().to_string());
    }
}
