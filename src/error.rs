//! Error types for consumers of the token stream.
//!
//! Scanning itself never fails: unrecognized characters come back as
//! `Illegal` tokens. The types here cover what a driver does around the
//! scanner, such as reading input or refusing a stream that contains
//! illegal characters.

use crate::lexer::{Token, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TinylexError {
    /// Input could not be read
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// The token stream contained characters outside the grammar
    #[error("{count} illegal character(s): {}", format_characters(.characters))]
    IllegalCharacters { count: usize, characters: Vec<String> },

    #[error("{0}")]
    Other(String),
}

fn format_characters(characters: &[String]) -> String {
    characters
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for TinylexError {
    fn from(e: std::io::Error) -> Self {
        TinylexError::Io {
            path: "<input>".to_string(),
            message: e.to_string(),
        }
    }
}

pub type TinylexResult<T> = Result<T, TinylexError>;

/// Treat any `Illegal` token as fatal, collecting all of them first
pub fn reject_illegal(tokens: &[Token]) -> TinylexResult<()> {
    let characters: Vec<String> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| t.text.clone())
        .collect();

    if characters.is_empty() {
        Ok(())
    } else {
        Err(TinylexError::IllegalCharacters {
            count: characters.len(),
            characters,
        })
    }
}
