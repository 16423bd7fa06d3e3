//! tinylex
//!
//! Lexical scanner for a small C-like scripting language. The library turns
//! source text into tokens on demand; parsing and evaluation are left to
//! downstream consumers.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{reject_illegal, TinylexError, TinylexResult};
pub use lexer::{classify_identifier, tokenize, Scanner, Token, TokenKind};
