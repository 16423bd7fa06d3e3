//! Token definitions

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Lexical categories of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    // Identifiers and literals
    Identifier,
    Integer,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl TokenKind {
    /// Stable category name. Operators and delimiters are named by their spelling.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn from_char(kind: TokenKind, ch: char) -> Self {
        Self {
            kind,
            text: ch.to_string(),
        }
    }

    /// The end-of-input token, which always carries empty text
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

static KEYWORDS: LazyLock<IndexMap<&'static str, TokenKind>> = LazyLock::new(|| {
    IndexMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
    ])
});

/// Resolve an identifier spelling to its keyword kind, or `Identifier`.
///
/// Matching is exact and case-sensitive.
pub fn classify_identifier(spelling: &str) -> TokenKind {
    KEYWORDS
        .get(spelling)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Reserved words in declaration order
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|(spelling, kind)| (*spelling, *kind))
}
