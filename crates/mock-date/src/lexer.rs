//! Tokenizer for date phrases.

use crate::error::{MockDateError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of ASCII letters. Case is preserved; keywords are case-sensitive.
    Word(String),
    /// A run of ASCII digits, kept as text until the grammar says what it counts.
    Number(String),
    LParen,
    RParen,
    /// Text between single quotes, verbatim.
    Quoted(String),
}

/// Split `input` into tokens. Whitespace separates tokens and is otherwise
/// ignored, except inside quotes.
///
/// Words, numbers, quoted patterns and `(` must be separated from a
/// preceding word, number, quoted pattern or `)` by whitespace, so `3days`
/// and `today(as day)` are rejected. `(as` and `day)` need no space.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    // True while the last token is a word, number, quote or `)` with no
    // whitespace after it yet.
    let mut touching = false;

    while let Some(&(start, ch)) = chars.peek() {
        if touching && !ch.is_whitespace() && ch != ')' {
            return Err(MockDateError::UnrecognizedExpression(format!(
                "missing space before position {} in '{}'",
                start,
                input.trim()
            )));
        }
        match ch {
            c if c.is_whitespace() => {
                chars.next();
                touching = false;
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
                touching = true;
            }
            '\'' => {
                chars.next();
                let mut quoted = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '\'' {
                        closed = true;
                        break;
                    }
                    quoted.push(c);
                }
                if !closed {
                    return Err(MockDateError::UnrecognizedExpression(format!(
                        "unterminated quote at position {} in '{}'",
                        start,
                        input.trim()
                    )));
                }
                tokens.push(Token::Quoted(quoted));
                touching = true;
            }
            c if c.is_ascii_digit() => {
                let end = scan_while(&mut chars, |c| c.is_ascii_digit()).unwrap_or(input.len());
                tokens.push(Token::Number(input[start..end].to_string()));
                touching = true;
            }
            c if c.is_ascii_alphabetic() => {
                let end =
                    scan_while(&mut chars, |c| c.is_ascii_alphabetic()).unwrap_or(input.len());
                tokens.push(Token::Word(input[start..end].to_string()));
                touching = true;
            }
            other => {
                return Err(MockDateError::UnrecognizedExpression(format!(
                    "unexpected character '{}' at position {} in '{}'",
                    other,
                    start,
                    input.trim()
                )));
            }
        }
    }

    Ok(tokens)
}

/// Advance past every char matching `pred`; returns the byte offset of the
/// first char that does not match, or `None` at end of input.
fn scan_while(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    pred: impl Fn(char) -> bool,
) -> Option<usize> {
    while let Some(&(i, c)) = chars.peek() {
        if !pred(c) {
            return Some(i);
        }
        chars.next();
    }
    None
}
