//! The parsed form of a date phrase.
//!
//! A phrase parses into an [`Expr`] tree. Leaves are always offsets from the
//! reference date; anchors and output transforms wrap an inner expression and
//! are applied after it has been resolved.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MockDateError;

/// The calendar field an offset or anchor operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Accepts both the singular and plural spelling.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "day" | "days" => Some(TimeUnit::Day),
            "month" | "months" => Some(TimeUnit::Month),
            "year" | "years" => Some(TimeUnit::Year),
            _ => None,
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            TimeUnit::Day => "days",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }
}

/// Which way an offset points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Past,
    Future,
    /// The reference date itself ("today").
    None,
}

impl Direction {
    /// +1, -1 or 0.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Past => -1,
            Direction::Future => 1,
            Direction::None => 0,
        }
    }
}

/// Snap to the start or end boundary of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Beginning,
    End,
}

/// How the resolved date is turned into the output string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Day of month, no leading zero.
    Day,
    /// Month number 1-12, no leading zero.
    Month,
    /// Four digit year.
    Year,
    /// strftime-style pattern.
    Custom(String),
}

/// A parsed phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Expr {
    /// `quantity` units in `direction` from the reference date.
    Offset {
        unit: TimeUnit,
        direction: Direction,
        quantity: u32,
    },
    Anchored {
        anchor: Anchor,
        unit: TimeUnit,
        inner: Box<Expr>,
    },
    Transformed {
        transform: Transform,
        inner: Box<Expr>,
    },
}

impl Expr {
    pub fn today() -> Self {
        Expr::Offset {
            unit: TimeUnit::Day,
            direction: Direction::None,
            quantity: 0,
        }
    }

    pub fn offset(unit: TimeUnit, direction: Direction, quantity: u32) -> Self {
        Expr::Offset {
            unit,
            direction,
            quantity,
        }
    }

    pub fn anchored(anchor: Anchor, unit: TimeUnit, inner: Expr) -> Self {
        Expr::Anchored {
            anchor,
            unit,
            inner: Box::new(inner),
        }
    }

    pub fn transformed(transform: Transform, inner: Expr) -> Self {
        Expr::Transformed {
            transform,
            inner: Box::new(inner),
        }
    }

    /// The output transform, if the outermost node carries one.
    pub fn transform(&self) -> Option<&Transform> {
        match self {
            Expr::Transformed { transform, .. } => Some(transform),
            _ => None,
        }
    }
}

impl FromStr for Expr {
    type Err = MockDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Offset {
                unit: TimeUnit::Day,
                direction: Direction::None,
                ..
            } => f.write_str("today"),
            Expr::Offset {
                unit,
                direction: Direction::None,
                ..
            } => write!(f, "0 {} from now", unit.plural()),
            Expr::Offset {
                unit,
                direction,
                quantity,
            } => {
                let tail = if *direction == Direction::Past {
                    "ago"
                } else {
                    "from now"
                };
                write!(f, "{} {} {}", quantity, unit.plural(), tail)
            }
            Expr::Anchored {
                anchor,
                unit,
                inner,
            } => {
                let word = match anchor {
                    Anchor::Beginning => "beginning",
                    Anchor::End => "end",
                };
                write!(f, "{} of {} {}", word, unit.singular(), inner)
            }
            Expr::Transformed { transform, inner } => match transform {
                Transform::Day => write!(f, "{} (as day)", inner),
                Transform::Month => write!(f, "{} (as month)", inner),
                Transform::Year => write!(f, "{} (as year)", inner),
                Transform::Custom(pattern) => write!(f, "{} (as custom '{}')", inner, pattern),
            },
        }
    }
}
