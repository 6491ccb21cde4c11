//! Calculator - arithmetic evaluation for chat requests
//!
//! Strips conversational filler ("calculate", "what is", ...) from the
//! utterance, then parses what remains with a small recursive-descent
//! grammar over `+ - * / ( )`, unary sign, and decimal numbers. Anything
//! outside that grammar is rejected deterministically instead of being
//! handed to a general evaluator.

use thiserror::Error;

/// Filler phrases removed before parsing, matched on the lowercased input
const FILLER_PHRASES: &[&str] = &["calculate", "what is", "what's", "="];

/// Why an expression was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unsupported character '{0}' in expression")]
    UnsupportedCharacter(char),

    #[error("malformed expression")]
    Malformed,

    #[error("division by zero")]
    DivisionByZero,

    #[error("nothing to calculate")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic utterance.
///
/// `evaluate("What is 4*4")` is `Ok(16.0)`; `evaluate("2 + a")` is an
/// `UnsupportedCharacter` rejection, never a partial evaluation.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let expression = strip_filler(input);
    if expression.is_empty() {
        return Err(CalcError::Empty);
    }

    let tokens = tokenize(&expression)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;

    // Trailing tokens mean the grammar did not cover the whole input.
    if parser.pos != parser.tokens.len() {
        return Err(CalcError::Malformed);
    }

    Ok(value)
}

/// Render a result without a trailing ".0" when it is integral
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Lowercase, drop filler phrases, drop all whitespace
fn strip_filler(input: &str) -> String {
    let mut text = input.to_lowercase();
    for phrase in FILLER_PHRASES {
        text = text.replace(phrase, "");
    }
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = expression.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let number = literal.parse::<f64>().map_err(|_| CalcError::Malformed)?;
                tokens.push(Token::Number(number));
                continue;
            }
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Minus),
            '*' => tokens.push(Token::Star),
            '/' => tokens.push(Token::Slash),
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            other => return Err(CalcError::UnsupportedCharacter(other)),
        }
        i += 1;
    }

    Ok(tokens)
}

/// Recursive-descent parser.
///
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := NUMBER | '(' expr ')' | ('+' | '-') factor
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
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

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = match op {
                Token::Plus => value + rhs,
                _ => value - rhs,
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            value = match op {
                Token::Star => value * rhs,
                _ => {
                    if rhs == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value / rhs
                }
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(CalcError::Malformed),
                }
            }
            _ => Err(CalcError::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_addition() {
        assert_eq!(evaluate("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_basic_multiplication() {
        assert_eq!(evaluate("10 * 5"), Ok(50.0));
    }

    #[test]
    fn test_filler_is_stripped() {
        assert_eq!(evaluate("What is 4*4"), Ok(16.0));
        assert_eq!(evaluate("Calculate 15 * 23"), Ok(345.0));
        assert_eq!(evaluate("what's 2 + 2 ="), Ok(4.0));
    }

    #[test]
    fn test_precedence_and_parentheses() {
        assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
        assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
    }

    #[test]
    fn test_decimals_and_division() {
        assert_eq!(evaluate("10 / 4"), Ok(2.5));
        assert_eq!(evaluate("1.5 + 2.25"), Ok(3.75));
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(evaluate("-3 + 5"), Ok(2.0));
        assert_eq!(evaluate("2 * -4"), Ok(-8.0));
    }

    #[test]
    fn test_letters_are_rejected() {
        assert_eq!(evaluate("2 + a"), Err(CalcError::UnsupportedCharacter('a')));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("10 / 0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("1 / (2 - 2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(evaluate("2 +"), Err(CalcError::Malformed));
        assert_eq!(evaluate("(2 + 3"), Err(CalcError::Malformed));
        assert_eq!(evaluate("2 3"), Err(CalcError::Malformed));
        assert_eq!(evaluate("1.2.3"), Err(CalcError::Malformed));
        assert_eq!(evaluate("()"), Err(CalcError::Malformed));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate("calculate"), Err(CalcError::Empty));
        assert_eq!(evaluate("   "), Err(CalcError::Empty));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(345.0), "345");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-8.0), "-8");
    }
}
