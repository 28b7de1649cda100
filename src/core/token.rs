// src/core/token.rs
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Variable(char),

    // Operators
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Caret,      // ^
    Equals,     // =

    // Superscript exponent written inline (x²)
    Superscript(u32),

    // Delimiters
    OpenParen,  // (
    CloseParen, // )

    EOF,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based character column in the normalized input.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, column: usize) -> Self {
        Self { kind, lexeme, column }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number(_) => "number",
            TokenKind::Variable(_) => "variable",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::Equals => "=",
            TokenKind::Superscript(_) => "superscript exponent",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::EOF => "end of input",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Number(v) => write!(f, "Number({}) @{}", v, self.column),
            TokenKind::Variable(c) => write!(f, "Variable('{}') @{}", c, self.column),
            TokenKind::Superscript(n) => write!(f, "Superscript({}) @{}", n, self.column),
            other => write!(f, "{} @{}", other, self.column),
        }
    }
}
