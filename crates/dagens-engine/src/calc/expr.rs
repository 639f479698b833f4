//! Arithmetic over decimal numbers, `+ - * /` and parentheses.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('+' | '-') unary | primary
//! primary    := number | '(' expression ')'
//! ```
//!
//! `×` and `÷` are accepted as the keypad spellings of `*` and `/`.

use crate::{Error, Result};

/// Nesting of parentheses and unary signs before the input is refused
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
}

/// Evaluate an arithmetic expression. Non-finite results (division by
/// zero, overflow) are errors.
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(invalid("empty expression"));
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expression()?;
    if let Some(token) = parser.peek() {
        return Err(invalid(format!("unexpected {}", describe(token))));
    }
    if !value.is_finite() {
        return Err(invalid("result is not a finite number"));
    }

    // -0 prints as "-0"
    Ok(if value == 0.0 { 0.0 } else { value })
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if !(d.is_ascii_digit() || d == '.') {
                        break;
                    }
                    end = i + d.len_utf8();
                    chars.next();
                }
                let literal = &input[start..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("malformed number '{}'", literal)))?;
                tokens.push(Token::Number(value));
                continue;
            }
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' | '×' => Token::Star,
            '/' | '÷' => Token::Slash,
            '(' => Token::Open,
            ')' => Token::Close,
            other => {
                return Err(invalid(format!(
                    "unexpected character '{}' at position {}",
                    other, start
                )));
            }
        };
        tokens.push(token);
        chars.next();
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.nested(Self::unary)?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Open) => {
                let value = self.nested(Self::expression)?;
                match self.advance() {
                    Some(Token::Close) => Ok(value),
                    Some(token) => Err(invalid(format!(
                        "expected ')' but found {}",
                        describe(token)
                    ))),
                    None => Err(invalid("missing ')'")),
                }
            }
            Some(token) => Err(invalid(format!("unexpected {}", describe(token)))),
            None => Err(invalid("expression ends too early")),
        }
    }

    fn nested(&mut self, rule: fn(&mut Self) -> Result<f64>) -> Result<f64> {
        if self.depth >= MAX_DEPTH {
            return Err(invalid("expression is nested too deeply"));
        }
        self.depth += 1;
        let value = rule(self);
        self.depth -= 1;
        value
    }
}

fn describe(token: Token) -> String {
    match token {
        Token::Number(value) => format!("number {}", value),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Open => "'('".to_string(),
        Token::Close => "')'".to_string(),
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidInput(msg.into())
}
