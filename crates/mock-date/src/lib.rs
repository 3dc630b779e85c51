//! # mock-date
//!
//! Deterministic relative-date phrases for data-driven test fixtures.
//!
//! Expected values that depend on the day a test runs ("created yesterday",
//! "due at the end of next month") cannot be hardcoded. Fixtures write them as
//! phrases instead, and this crate resolves each phrase against an explicit
//! reference date into the string a database query would return.
//!
//! ```
//! use chrono::NaiveDate;
//! use mock_date::evaluate;
//!
//! let today = NaiveDate::from_ymd_opt(2019, 1, 31).unwrap();
//! assert_eq!(evaluate("next month", today).unwrap(), "2019-02-28");
//! assert_eq!(evaluate("beginning of month 9 months from now", today).unwrap(), "2019-10-01");
//! assert_eq!(evaluate("today (as custom '%Y/%m/%d')", today).unwrap(), "2019/01/31");
//! ```
//!
//! ## Modules
//!
//! - [`eval`] — phrase + reference date → output string
//! - [`parser`] — phrase → [`Expr`] tree
//! - [`expr`] — the parsed expression types
//! - [`calendar`] — day/month/year offsets with day-of-month clamping
//! - [`clock`] — injectable source of "today"
//! - [`fixture`] — convert whole fixture rows, leaving non-phrase cells alone
//! - [`error`] — Error types

pub mod calendar;
pub mod clock;
pub mod error;
pub mod eval;
pub mod expr;
pub mod fixture;
mod lexer;
pub mod parser;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{MockDateError, Result};
pub use eval::{
    evaluate, evaluate_with_clock, evaluate_with_options, format_date, render, resolve,
    EvaluateOptions, DEFAULT_FORMAT,
};
pub use expr::{Anchor, Direction, Expr, TimeUnit, Transform};
pub use fixture::{convert_json, convert_row, convert_rows, convert_value, Row};
pub use parser::parse;
