//! Evaluating phrases against a reference date.
//!
//! All functions are pure: the reference date is an explicit input, or is
//! read exactly once from a caller-supplied [`Clock`].
//!
//! # Functions
//!
//! - [`evaluate`] — phrase + reference date → output string
//! - [`evaluate_with_options`] — same, with a configurable default format
//! - [`evaluate_with_clock`] — reference date taken from a [`Clock`]
//! - [`resolve`] — parsed expression → calendar date, ignoring the transform
//! - [`render`] — apply an expression's output transform to a resolved date

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::calendar;
use crate::clock::Clock;
use crate::error::{MockDateError, Result};
use crate::expr::{Anchor, Expr, Transform};
use crate::parser::parse;

/// Output format used when a phrase carries no transform.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Options for [`evaluate_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluateOptions {
    /// strftime pattern for phrases without an `(as ...)` transform.
    pub default_format: String,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Evaluate a phrase against `reference` and format the result.
///
/// Dates without a transform are rendered as zero-padded `YYYY-MM-DD`.
/// `(as day)`, `(as month)` and `(as year)` render the bare number, and
/// `(as custom '<pattern>')` renders with the given strftime pattern.
///
/// # Errors
///
/// Returns [`MockDateError::UnrecognizedExpression`] if the phrase does not
/// follow the grammar, [`MockDateError::InvalidFormatPattern`] if a custom
/// pattern is malformed, or [`MockDateError::OutOfRange`] if the result is
/// not a representable date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mock_date::evaluate;
///
/// let today = NaiveDate::from_ymd_opt(2017, 7, 15).unwrap();
/// assert_eq!(evaluate("10 days ago", today).unwrap(), "2017-07-05");
/// assert_eq!(evaluate("end of month 10 months from now", today).unwrap(), "2018-05-31");
/// assert_eq!(evaluate("30 days from now (as month)", today).unwrap(), "8");
/// ```
pub fn evaluate(phrase: &str, reference: NaiveDate) -> Result<String> {
    evaluate_with_options(phrase, reference, &EvaluateOptions::default())
}

/// Evaluate a phrase with explicit options.
pub fn evaluate_with_options(
    phrase: &str,
    reference: NaiveDate,
    options: &EvaluateOptions,
) -> Result<String> {
    let expr = parse(phrase)?;
    let date = resolve(&expr, reference)?;
    let output = render(&expr, date, options)?;
    tracing::debug!(phrase = phrase.trim(), %reference, %output, "evaluated");
    Ok(output)
}

/// Evaluate a phrase against the date reported by `clock`.
pub fn evaluate_with_clock<C: Clock + ?Sized>(phrase: &str, clock: &C) -> Result<String> {
    evaluate(phrase, clock.today())
}

/// Resolve `expr` to a calendar date. Output transforms do not change the
/// date and are skipped.
pub fn resolve(expr: &Expr, reference: NaiveDate) -> Result<NaiveDate> {
    match expr {
        Expr::Offset {
            unit,
            direction,
            quantity,
        } => calendar::shift(reference, *unit, direction.sign() * i64::from(*quantity)),
        Expr::Anchored {
            anchor,
            unit,
            inner,
        } => {
            let date = resolve(inner, reference)?;
            Ok(match anchor {
                Anchor::Beginning => calendar::beginning_of(date, *unit),
                Anchor::End => calendar::end_of(date, *unit),
            })
        }
        Expr::Transformed { inner, .. } => resolve(inner, reference),
    }
}

/// Turn a resolved date into the output string for `expr`.
pub fn render(expr: &Expr, date: NaiveDate, options: &EvaluateOptions) -> Result<String> {
    match expr.transform() {
        Some(Transform::Day) => Ok(date.day().to_string()),
        Some(Transform::Month) => Ok(date.month().to_string()),
        Some(Transform::Year) => Ok(date.year().to_string()),
        Some(Transform::Custom(pattern)) => format_date(date, pattern),
        None => format_date(date, &options.default_format),
    }
}

/// Format `date` with a strftime pattern.
///
/// The date is formatted as midnight, so time directives such as `%H:%M`
/// render `00:00`. Directives that need an offset (`%z`, `%Z`) fail.
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(MockDateError::InvalidFormatPattern(format!(
            "'{}': unknown directive",
            pattern
        )));
    }

    let midnight = date.and_time(NaiveTime::MIN);
    let mut out = String::new();
    write!(out, "{}", midnight.format_with_items(items.into_iter())).map_err(|_| {
        MockDateError::InvalidFormatPattern(format!(
            "'{}': directive not available for a calendar date",
            pattern
        ))
    })?;
    Ok(out)
}
