//! Lexer and recursive-descent parser for boolean expressions
//!
//! Precedence, loosest to tightest: OR, XOR, AND, NOT. Each level is one
//! function of the descent; parentheses restart from the top.

use super::error::{ParseError, ParseErrorKind};
use super::BoolExpr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Not,
    And,
    Or,
    Xor,
    LParen,
    RParen,
    Constant(bool),
    Ident(Arc<str>),
}

/// Tokenize the input. Characters outside the token set are skipped.
fn lex(input: &str) -> Vec<(usize, Token)> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let at = pos;
        match bytes[pos] {
            b'!' | b'~' => {
                tokens.push((at, Token::Not));
                pos += 1;
            }
            b'&' => {
                // `&&` is one AND token
                pos += if bytes.get(pos + 1) == Some(&b'&') { 2 } else { 1 };
                tokens.push((at, Token::And));
            }
            b'*' => {
                tokens.push((at, Token::And));
                pos += 1;
            }
            b'|' => {
                pos += if bytes.get(pos + 1) == Some(&b'|') { 2 } else { 1 };
                tokens.push((at, Token::Or));
            }
            b'+' => {
                tokens.push((at, Token::Or));
                pos += 1;
            }
            b'^' => {
                tokens.push((at, Token::Xor));
                pos += 1;
            }
            b'(' => {
                tokens.push((at, Token::LParen));
                pos += 1;
            }
            b')' => {
                tokens.push((at, Token::RParen));
                pos += 1;
            }
            c if c.is_ascii_alphanumeric() || c == b'_' => {
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                let word = &input[at..pos];
                if let Some(token) = classify_word(word) {
                    tokens.push((at, token));
                }
            }
            // Whitespace and anything unrecognized is skipped silently.
            _ => pos += 1,
        }
    }

    tokens
}

/// Classify an identifier-shaped run. Keyword operators and constants match
/// case-insensitively; the run is already bounded by non-alphanumerics by
/// construction. Digit-led runs other than `0`/`1` are dropped.
fn classify_word(word: &str) -> Option<Token> {
    match word {
        "0" => return Some(Token::Constant(false)),
        "1" => return Some(Token::Constant(true)),
        _ => {}
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    if word.eq_ignore_ascii_case("not") {
        Some(Token::Not)
    } else if word.eq_ignore_ascii_case("and") {
        Some(Token::And)
    } else if word.eq_ignore_ascii_case("or") {
        Some(Token::Or)
    } else if word.eq_ignore_ascii_case("xor") {
        Some(Token::Xor)
    } else if word.eq_ignore_ascii_case("true") {
        Some(Token::Constant(true))
    } else if word.eq_ignore_ascii_case("false") {
        Some(Token::Constant(false))
    } else {
        Some(Token::Ident(Arc::from(word)))
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    end: usize,
}

pub(super) fn parse(input: &str) -> Result<BoolExpr, ParseError> {
    let mut parser = Parser {
        tokens: lex(input),
        pos: 0,
        end: input.len(),
    };
    let expr = parser.parse_or()?;
    if let Some((at, _)) = parser.peek() {
        return Err(ParseError {
            kind: ParseErrorKind::UnexpectedTrailingTokens,
            position: at,
        });
    }
    Ok(expr)
}

impl Parser {
    fn peek(&self) -> Option<(usize, &Token)> {
        self.tokens.get(self.pos).map(|(at, token)| (*at, token))
    }

    fn bump(&mut self) -> Option<(usize, Token)> {
        let entry = self.tokens.get(self.pos).cloned();
        if entry.is_some() {
            self.pos += 1;
        }
        entry
    }

    fn parse_or(&mut self) -> Result<BoolExpr, ParseError> {
        let mut left = self.parse_xor()?;
        while matches!(self.peek(), Some((_, Token::Or))) {
            self.bump();
            let right = self.parse_xor()?;
            left = left.or(&right);
        }
        Ok(left)
    }

    fn parse_xor(&mut self) -> Result<BoolExpr, ParseError> {
        let mut left = self.parse_and()?;
        while matches!(self.peek(), Some((_, Token::Xor))) {
            self.bump();
            let right = self.parse_and()?;
            left = left.xor(&right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<BoolExpr, ParseError> {
        let mut left = self.parse_unary()?;
        while matches!(self.peek(), Some((_, Token::And))) {
            self.bump();
            let right = self.parse_unary()?;
            left = left.and(&right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<BoolExpr, ParseError> {
        if matches!(self.peek(), Some((_, Token::Not))) {
            self.bump();
            let inner = self.parse_unary()?;
            return Ok(inner.not());
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<BoolExpr, ParseError> {
        match self.bump() {
            Some((_, Token::Ident(name))) => Ok(BoolExpr::variable_arc(name)),
            Some((_, Token::Constant(value))) => Ok(BoolExpr::constant(value)),
            Some((_, Token::LParen)) => {
                let expr = self.parse_or()?;
                match self.bump() {
                    Some((_, Token::RParen)) => Ok(expr),
                    Some((at, _)) => Err(ParseError {
                        kind: ParseErrorKind::MissingClosingParen,
                        position: at,
                    }),
                    None => Err(ParseError {
                        kind: ParseErrorKind::MissingClosingParen,
                        position: self.end,
                    }),
                }
            }
            // A token that cannot start an operand means the expression
            // stopped short of one.
            Some((at, _)) => Err(ParseError {
                kind: ParseErrorKind::UnexpectedEnd,
                position: at,
            }),
            None => Err(ParseError {
                kind: ParseErrorKind::UnexpectedEnd,
                position: self.end,
            }),
        }
    }
}
