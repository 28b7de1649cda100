//! Recursive-descent equation parser. Each side is folded directly into a
//! `Polynomial` in the single equation variable.
//!
//! ```text
//! equation := expr ( '=' expr )?
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/')? unary)*
//! unary    := ('+' | '-') unary | power
//! power    := primary ('^' integer | superscript)?
//! primary  := number | variable | '(' expr ')'
//! ```

use log::trace;

use crate::core::error::{SolveError, SolveResult};
use crate::core::lexer::Lexer;
use crate::core::polynomial::Polynomial;
use crate::core::token::{Token, TokenKind};

pub const DEFAULT_MAX_DEGREE: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    /// The variable letter, if one appears anywhere in the input.
    pub variable: Option<char>,
    pub lhs: Polynomial,
    /// `None` when the input had no `=`.
    pub rhs: Option<Polynomial>,
}

impl Equation {
    pub fn parse(text: &str) -> SolveResult<Self> {
        Self::parse_with_max_degree(text, DEFAULT_MAX_DEGREE)
    }

    pub fn parse_with_max_degree(text: &str, max_degree: usize) -> SolveResult<Self> {
        let tokens = Lexer::new(text).tokenize()?;
        let eq = Parser::new(tokens, max_degree).parse_equation()?;
        trace!("parsed {:?} into lhs={} rhs={:?}", text, eq.lhs, eq.rhs.as_ref().map(|p| p.to_string()));
        Ok(eq)
    }

    pub fn has_equals(&self) -> bool {
        self.rhs.is_some()
    }

    /// `lhs - rhs`, i.e. the equation moved to the form `p(x) = 0`. A missing
    /// right-hand side counts as zero.
    pub fn normalized(&self) -> Polynomial {
        match &self.rhs {
            Some(rhs) => &self.lhs - rhs,
            None => self.lhs.clone(),
        }
    }

    /// Variable name for display; defaults to `x`.
    pub fn variable_or_x(&self) -> char {
        self.variable.unwrap_or('x')
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    variable: Option<char>,
    max_degree: usize,
}

impl Parser {
    /// Create new parser instance; ensure trailing EOF token present
    pub fn new(mut tokens: Vec<Token>, max_degree: usize) -> Self {
        let needs_eof = match tokens.last() {
            Some(t) => !matches!(t.kind, TokenKind::EOF),
            None => true,
        };
        if needs_eof {
            let col = tokens.last().map(|t| t.column + t.lexeme.chars().count()).unwrap_or(1);
            tokens.push(Token::new(TokenKind::EOF, String::new(), col));
        }
        Parser { tokens, pos: 0, variable: None, max_degree }
    }

    pub fn parse_equation(&mut self) -> SolveResult<Equation> {
        let equals: Vec<usize> = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Equals)
            .map(|t| t.column)
            .collect();
        if equals.len() > 1 {
            return Err(SolveError::format_at(
                "Please enter a valid equation with only one \"=\" sign.",
                equals[1],
            ));
        }

        let lhs = self.parse_expr()?;
        let rhs = if self.match_token(&TokenKind::Equals) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        if !self.is_at_end() {
            let tok = self.peek();
            return Err(SolveError::format_at(format!("Unexpected '{}'", tok.lexeme), tok.column));
        }
        Ok(Equation { variable: self.variable, lhs, rhs })
    }

    fn parse_expr(&mut self) -> SolveResult<Polynomial> {
        let mut acc = self.parse_term()?;
        loop {
            if self.match_token(&TokenKind::Plus) {
                let rhs = self.parse_term()?;
                acc = &acc + &rhs;
            } else if self.match_token(&TokenKind::Minus) {
                let rhs = self.parse_term()?;
                acc = &acc - &rhs;
            } else {
                return Ok(acc);
            }
        }
    }

    fn parse_term(&mut self) -> SolveResult<Polynomial> {
        let mut acc = self.parse_unary()?;
        loop {
            if self.match_token(&TokenKind::Star) {
                let rhs = self.parse_unary()?;
                acc = self.multiply(&acc, &rhs)?;
            } else if self.check(&TokenKind::Slash) {
                let slash = self.advance().column;
                let rhs = self.parse_unary()?;
                acc = divide(&acc, &rhs, slash)?;
            } else if self.starts_primary() {
                // juxtaposition: 2x, 3(x + 1), x(x - 1); a number only leads
                if let TokenKind::Number(_) = self.peek().kind {
                    let tok = self.peek();
                    return Err(SolveError::format_at(
                        format!("Missing operator before '{}'", tok.lexeme),
                        tok.column,
                    ));
                }
                let rhs = self.parse_power()?;
                acc = self.multiply(&acc, &rhs)?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn parse_unary(&mut self) -> SolveResult<Polynomial> {
        if self.match_token(&TokenKind::Minus) {
            let inner = self.parse_unary()?;
            return Ok(-&inner);
        }
        if self.match_token(&TokenKind::Plus) {
            return self.parse_unary();
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> SolveResult<Polynomial> {
        let base = self.parse_primary()?;
        let exp = match self.peek().kind.clone() {
            TokenKind::Caret => {
                self.advance();
                let tok = self.advance().clone();
                match tok.kind {
                    TokenKind::Number(v) if v.fract() == 0.0 && v <= u32::MAX as f64 => v as u32,
                    _ => {
                        return Err(SolveError::format_at(
                            "Exponent must be a non-negative integer",
                            tok.column,
                        ))
                    }
                }
            }
            TokenKind::Superscript(n) => {
                self.advance();
                n
            }
            _ => return Ok(base),
        };
        let col = self.tokens[self.pos - 1].column;
        if let Some(c) = base.as_constant() {
            let v = c.powf(exp as f64);
            if !v.is_finite() {
                return Err(SolveError::format_at("Number is too large", col));
            }
            return Ok(Polynomial::constant(v));
        }
        let base_degree = base.degree().unwrap_or(0);
        if base_degree.saturating_mul(exp as usize) > self.max_degree {
            return Err(SolveError::format_at(
                format!("Degree exceeds the supported maximum of {}", self.max_degree),
                col,
            ));
        }
        Ok(base.pow(exp))
    }

    fn parse_primary(&mut self) -> SolveResult<Polynomial> {
        let tok = self.advance().clone();
        match tok.kind {
            TokenKind::Number(v) => Ok(Polynomial::constant(v)),
            TokenKind::Variable(name) => {
                self.bind_variable(name, tok.column)?;
                Ok(Polynomial::monomial(1.0, 1))
            }
            TokenKind::OpenParen => {
                let inner = self.parse_expr()?;
                self.consume(TokenKind::CloseParen, "Expected ')'")?;
                Ok(inner)
            }
            TokenKind::EOF => Err(SolveError::format_at("Expected an expression", tok.column)),
            _ => Err(SolveError::format_at(
                format!("Unexpected '{}', expected a number, variable or '('", tok.lexeme),
                tok.column,
            )),
        }
    }

    fn bind_variable(&mut self, name: char, column: usize) -> SolveResult<()> {
        match self.variable {
            None => {
                self.variable = Some(name);
                Ok(())
            }
            Some(v) if v == name => Ok(()),
            Some(v) => Err(SolveError::format_at(
                format!("Equation mixes variables '{}' and '{}'", v, name),
                column,
            )),
        }
    }

    fn multiply(&self, a: &Polynomial, b: &Polynomial) -> SolveResult<Polynomial> {
        let degree = a.degree().unwrap_or(0) + b.degree().unwrap_or(0);
        if degree > self.max_degree {
            let col = self.tokens[self.pos.saturating_sub(1)].column;
            return Err(SolveError::format_at(
                format!("Degree exceeds the supported maximum of {}", self.max_degree),
                col,
            ));
        }
        Ok(a * b)
    }

    // --- helpers ---

    fn starts_primary(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Number(_) | TokenKind::Variable(_) | TokenKind::OpenParen
        )
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: TokenKind, msg: &str) -> SolveResult<&Token> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(SolveError::format_at(msg, self.peek().column))
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
            return &self.tokens[self.pos - 1];
        }
        self.peek()
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::EOF)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }
}

fn divide(a: &Polynomial, b: &Polynomial, column: usize) -> SolveResult<Polynomial> {
    match b.as_constant() {
        Some(d) if d == 0.0 => Err(SolveError::DivisionByZero),
        Some(d) => Ok(a.scale(1.0 / d)),
        None => Err(SolveError::format_at(
            "Division by an expression containing the variable is not supported",
            column,
        )),
    }
}
