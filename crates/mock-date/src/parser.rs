//! Recursive-descent parser for date phrases.
//!
//! ```text
//! phrase    := core transform? EOF
//! core      := anchor core | simple
//! anchor    := ("beginning" | "end") "of" unit
//! simple    := "today" | "tomorrow" | "yesterday"
//!            | ("last" | "next") unit
//!            | NUMBER unit ("ago" | "from" "now")
//! transform := "(" "as" ("day" | "month" | "year" | "custom" QUOTED) ")"
//! unit      := "day" | "days" | "month" | "months" | "year" | "years"
//! ```
//!
//! Anything else is rejected. The parser never guesses.

use crate::error::{MockDateError, Result};
use crate::expr::{Anchor, Direction, Expr, TimeUnit, Transform};
use crate::lexer::{tokenize, Token};

/// Parse a phrase into an [`Expr`].
///
/// # Examples
///
/// ```
/// use mock_date::{parse, Anchor, Direction, Expr, TimeUnit};
///
/// let expr = parse("beginning of month 9 months from now").unwrap();
/// assert_eq!(
///     expr,
///     Expr::anchored(
///         Anchor::Beginning,
///         TimeUnit::Month,
///         Expr::offset(TimeUnit::Month, Direction::Future, 9),
///     )
/// );
/// ```
pub fn parse(phrase: &str) -> Result<Expr> {
    let tokens = tokenize(phrase)?;
    let mut parser = Parser {
        phrase: phrase.trim(),
        tokens: &tokens,
        pos: 0,
    };
    let expr = parser.phrase()?;
    tracing::trace!(phrase = parser.phrase, ?expr, "parsed");
    Ok(expr)
}

struct Parser<'a> {
    phrase: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn phrase(&mut self) -> Result<Expr> {
        let core = self.core()?;
        let expr = if self.peek() == Some(&Token::LParen) {
            let transform = self.transform()?;
            Expr::transformed(transform, core)
        } else {
            core
        };
        if let Some(token) = self.peek() {
            return Err(self.error(format!("unexpected {}", describe(token))));
        }
        Ok(expr)
    }

    fn core(&mut self) -> Result<Expr> {
        match self.peek_word() {
            Some("beginning") | Some("end") => {
                let anchor = if self.next_word() == Some("beginning") {
                    Anchor::Beginning
                } else {
                    Anchor::End
                };
                self.expect_word("of")?;
                let unit = self.unit()?;
                if self.at_end_of_core() {
                    return Err(self.error(format!(
                        "expected an expression after '{} of {}'",
                        if anchor == Anchor::Beginning {
                            "beginning"
                        } else {
                            "end"
                        },
                        unit.singular()
                    )));
                }
                let inner = self.core()?;
                Ok(Expr::anchored(anchor, unit, inner))
            }
            _ => self.simple(),
        }
    }

    fn simple(&mut self) -> Result<Expr> {
        match self.advance() {
            Some(Token::Word(w)) => match w.as_str() {
                "today" => Ok(Expr::today()),
                "tomorrow" => Ok(Expr::offset(TimeUnit::Day, Direction::Future, 1)),
                "yesterday" => Ok(Expr::offset(TimeUnit::Day, Direction::Past, 1)),
                "next" => {
                    let unit = self.unit()?;
                    Ok(Expr::offset(unit, Direction::Future, 1))
                }
                "last" => {
                    let unit = self.unit()?;
                    Ok(Expr::offset(unit, Direction::Past, 1))
                }
                other => Err(self.error(format!("unknown keyword '{}'", other))),
            },
            Some(Token::Number(digits)) => {
                let unit = self.unit()?;
                let direction = match self.next_word() {
                    Some("ago") => Direction::Past,
                    Some("from") => {
                        self.expect_word("now")?;
                        Direction::Future
                    }
                    _ => return Err(self.error("expected 'ago' or 'from now'".to_string())),
                };
                let quantity = digits.parse::<u32>().map_err(|_| {
                    MockDateError::OutOfRange(format!("quantity {} is too large", digits))
                })?;
                Ok(Expr::offset(unit, direction, quantity))
            }
            Some(token) => Err(self.error(format!("unexpected {}", describe(token)))),
            None => Err(self.error("expected an expression".to_string())),
        }
    }

    fn transform(&mut self) -> Result<Transform> {
        self.expect(&Token::LParen)?;
        self.expect_word("as")?;
        let transform = match self.next_word() {
            Some("day") => Transform::Day,
            Some("month") => Transform::Month,
            Some("year") => Transform::Year,
            Some("custom") => match self.advance() {
                Some(Token::Quoted(pattern)) => Transform::Custom(pattern.clone()),
                _ => return Err(self.error("expected a quoted format after 'custom'".to_string())),
            },
            _ => {
                return Err(self.error(
                    "expected 'day', 'month', 'year' or 'custom' after 'as'".to_string(),
                ))
            }
        };
        self.expect(&Token::RParen)?;
        Ok(transform)
    }

    fn unit(&mut self) -> Result<TimeUnit> {
        match self.next_word() {
            Some(w) => TimeUnit::from_word(w)
                .ok_or_else(|| self.error(format!("expected a unit, found '{}'", w))),
            None => Err(self.error("expected 'day', 'month' or 'year'".to_string())),
        }
    }

    fn at_end_of_core(&self) -> bool {
        matches!(self.peek(), None | Some(Token::LParen))
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_word(&self) -> Option<&'a str> {
        match self.peek() {
            Some(Token::Word(w)) => Some(w.as_str()),
            _ => None,
        }
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it is a word.
    fn next_word(&mut self) -> Option<&'a str> {
        let word = self.peek_word();
        if word.is_some() {
            self.pos += 1;
        }
        word
    }

    fn expect_word(&mut self, expected: &str) -> Result<()> {
        match self.next_word() {
            Some(w) if w == expected => Ok(()),
            _ => Err(self.error(format!("expected '{}'", expected))),
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<()> {
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            _ => Err(self.error(format!("expected {}", describe(expected)))),
        }
    }

    fn error(&self, reason: String) -> MockDateError {
        MockDateError::UnrecognizedExpression(format!("'{}': {}", self.phrase, reason))
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Word(w) => format!("'{}'", w),
        Token::Number(digits) => format!("'{}'", digits),
        Token::LParen => "'('".to_string(),
        Token::RParen => "')'".to_string(),
        Token::Quoted(q) => format!("'{}' (quoted)", q),
    }
}
