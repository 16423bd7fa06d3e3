//! Character-level scanner

use super::token::{classify_identifier, Token, TokenKind};

/// Scanner over an in-memory source buffer.
///
/// Produces one token per [`Scanner::next_token`] call. The cursors only
/// move forward; once the input is exhausted every further call yields
/// `EndOfInput`.
pub struct Scanner {
    /// Source characters
    input: Vec<char>,
    /// Index of the character under examination
    position: usize,
    /// Index of the next character to read
    read_position: usize,
    /// Character at `position`, `None` past the end
    current: Option<char>,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        let mut scanner = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            current: None,
        };
        scanner.advance();
        scanner
    }

    /// Look at the next character without consuming anything
    fn peek(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn advance(&mut self) {
        self.current = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    /// Produce the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.current else {
            return Token::eof();
        };

        let token = match ch {
            ';' => Token::from_char(TokenKind::Semicolon, ch),
            '(' => Token::from_char(TokenKind::LParen, ch),
            ')' => Token::from_char(TokenKind::RParen, ch),
            ',' => Token::from_char(TokenKind::Comma, ch),
            '+' => Token::from_char(TokenKind::Plus, ch),
            '-' => Token::from_char(TokenKind::Minus, ch),
            '*' => Token::from_char(TokenKind::Asterisk, ch),
            '/' => Token::from_char(TokenKind::Slash, ch),
            '{' => Token::from_char(TokenKind::LBrace, ch),
            '}' => Token::from_char(TokenKind::RBrace, ch),
            '<' => Token::from_char(TokenKind::LessThan, ch),
            '>' => Token::from_char(TokenKind::GreaterThan, ch),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Equal, "==")
                } else {
                    Token::from_char(TokenKind::Assign, ch)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEqual, "!=")
                } else {
                    Token::from_char(TokenKind::Bang, ch)
                }
            }
            c if is_letter(c) => {
                let text = self.read_while(is_letter);
                let token = Token::new(classify_identifier(&text), text);
                log::trace!("scanned {token}");
                return token;
            }
            c if c.is_ascii_digit() => {
                let token = Token::new(TokenKind::Integer, self.read_while(|c| c.is_ascii_digit()));
                log::trace!("scanned {token}");
                return token;
            }
            _ => Token::from_char(TokenKind::Illegal, ch),
        };

        self.advance();
        log::trace!("scanned {token}");
        token
    }

    /// Consume the maximal run of characters matching `pred`, starting at the current one
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.current.is_some_and(&pred) {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to, but not including, `EndOfInput`
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl std::iter::FusedIterator for Scanner {}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scan the whole input, including the trailing `EndOfInput` token
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    log::debug!("tokenized {} characters into {} tokens", scanner.input.len(), tokens.len());
    tokens
}

/// Debug rendering: one `index: KIND "text"` line per token
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{i:4}: {t}"))
        .collect::<Vec<_>>()
        .join("\n")
}
