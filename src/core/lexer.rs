// lexer.rs

use std::fmt;
use unicode_ident::is_xid_start;
use unicode_normalization::UnicodeNormalization;

use crate::core::error::SolveError;
use crate::core::token::{Token, TokenKind};

/// Lexer error types with 1-based column.
#[derive(Debug, Clone, PartialEq)]
pub enum LexerError {
    UnexpectedCharacter(char, usize),
    InvalidNumber(String, usize),
    ExponentTooLarge(String, usize),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LexerError::*;
        match self {
            UnexpectedCharacter(ch, col) => write!(f, "Unexpected character '{}' at column {}", ch, col),
            InvalidNumber(num, col) => write!(f, "Invalid number literal '{}' at column {}", num, col),
            ExponentTooLarge(exp, col) => write!(f, "Exponent '{}' is too large at column {}", exp, col),
        }
    }
}

impl std::error::Error for LexerError {}

impl From<LexerError> for SolveError {
    fn from(e: LexerError) -> Self {
        let col = match &e {
            LexerError::UnexpectedCharacter(_, c)
            | LexerError::InvalidNumber(_, c)
            | LexerError::ExponentTooLarge(_, c) => *c,
        };
        SolveError::format_at(e.to_string(), col)
    }
}

/// Equation tokenizer. Input is NFC-normalized before scanning; whitespace is
/// insignificant.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.nfc().collect();
        Self { chars, pos: 0 }
    }

    #[inline]
    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn column(&self) -> usize {
        self.pos + 1
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::EOF);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        while let Some(ch) = self.current() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += 1;
        }

        let ch = match self.current() {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::EOF, String::new(), self.column())),
        };

        if let Some(kind) = single_char_token(ch) {
            let col = self.column();
            self.pos += 1;
            return Ok(Token::new(kind, ch.to_string(), col));
        }
        if ch.is_ascii_digit() || ch == '.' {
            return self.lex_number();
        }
        if superscript_digit(ch).is_some() {
            return self.lex_superscript();
        }
        if is_xid_start(ch) {
            let col = self.column();
            self.pos += 1;
            return Ok(Token::new(TokenKind::Variable(ch), ch.to_string(), col));
        }
        Err(LexerError::UnexpectedCharacter(ch, self.column()))
    }

    fn lex_number(&mut self) -> Result<Token, LexerError> {
        let col = self.column();
        let mut lexeme = String::new();
        let mut seen_dot = false;
        while let Some(ch) = self.current() {
            if ch.is_ascii_digit() {
                lexeme.push(ch);
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                lexeme.push(ch);
            } else {
                break;
            }
            self.pos += 1;
        }
        if lexeme == "." {
            return Err(LexerError::InvalidNumber(lexeme, col));
        }
        // 1.2.3: swallow the rest so the error shows the whole literal
        if seen_dot && self.current() == Some('.') {
            while let Some(ch) = self.current().filter(|c| c.is_ascii_digit() || *c == '.') {
                lexeme.push(ch);
                self.pos += 1;
            }
            return Err(LexerError::InvalidNumber(lexeme, col));
        }
        match lexeme.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Token::new(TokenKind::Number(v), lexeme, col)),
            _ => Err(LexerError::InvalidNumber(lexeme, col)),
        }
    }

    fn lex_superscript(&mut self) -> Result<Token, LexerError> {
        let col = self.column();
        let mut lexeme = String::new();
        let mut value: u32 = 0;
        while let Some(d) = self.current().and_then(superscript_digit) {
            lexeme.push(self.chars[self.pos]);
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(d))
                .ok_or_else(|| LexerError::ExponentTooLarge(lexeme.clone(), col))?;
            self.pos += 1;
        }
        Ok(Token::new(TokenKind::Superscript(value), lexeme, col))
    }
}

fn single_char_token(ch: char) -> Option<TokenKind> {
    Some(match ch {
        '+' => TokenKind::Plus,
        '-' | '\u{2212}' => TokenKind::Minus,
        '*' | '×' | '·' => TokenKind::Star,
        '/' | '÷' => TokenKind::Slash,
        '^' => TokenKind::Caret,
        '=' => TokenKind::Equals,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        _ => return None,
    })
}

fn superscript_digit(ch: char) -> Option<u32> {
    match ch {
        '⁰' => Some(0),
        '¹' => Some(1),
        '²' => Some(2),
        '³' => Some(3),
        '⁴'..='⁹' => Some(ch as u32 - '⁴' as u32 + 4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_quadratic() {
        assert_eq!(
            kinds("2x^2 - 3.5x + 1 = 0"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Variable('x'),
                TokenKind::Caret,
                TokenKind::Number(2.0),
                TokenKind::Minus,
                TokenKind::Number(3.5),
                TokenKind::Variable('x'),
                TokenKind::Plus,
                TokenKind::Number(1.0),
                TokenKind::Equals,
                TokenKind::Number(0.0),
                TokenKind::EOF,
            ]
        );
    }

    #[test]
    fn lexes_superscripts_and_unicode_operators() {
        assert_eq!(
            kinds("x² − 4 = 0"),
            vec![
                TokenKind::Variable('x'),
                TokenKind::Superscript(2),
                TokenKind::Minus,
                TokenKind::Number(4.0),
                TokenKind::Equals,
                TokenKind::Number(0.0),
                TokenKind::EOF,
            ]
        );
        assert_eq!(kinds("y¹⁰")[1], TokenKind::Superscript(10));
    }

    #[test]
    fn leading_dot_number() {
        assert_eq!(kinds(".5x")[0], TokenKind::Number(0.5));
    }

    #[test]
    fn rejects_unknown_character() {
        let err = Lexer::new("x^2 # 1").tokenize().unwrap_err();
        assert_eq!(err, LexerError::UnexpectedCharacter('#', 5));
        let solve_err: SolveError = err.into();
        assert_eq!(solve_err.column(), Some(5));
    }

    #[test]
    fn rejects_lonely_dot() {
        let err = Lexer::new("x + . = 0").tokenize().unwrap_err();
        assert!(matches!(err, LexerError::InvalidNumber(_, 5)), "got: {err}");
    }

    #[test]
    fn rejects_second_decimal_point() {
        let err = Lexer::new("x^2 - 1.2.3 = 0").tokenize().unwrap_err();
        assert_eq!(err, LexerError::InvalidNumber("1.2.3".into(), 7));
    }
}
