//! Lexical analysis module.
//!
//! Turns source text into a stream of classified tokens: identifiers and
//! keywords, integer literals, one- and two-character operators, and
//! delimiters. Anything else comes out as an `Illegal` token carrying the
//! offending character; deciding whether that is fatal is up to the caller.

pub mod scanner;
pub mod token;

pub use scanner::{format_tokens, tokenize, Scanner};
pub use token::{classify_identifier, keywords, Token, TokenKind};
