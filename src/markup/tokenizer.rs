//! Splits markup into literal text runs and tags.
//!
//! - `[[` and `]]` are literal brackets
//! - `[spec]` opens a style, `[/]` (or `[/anything]`) closes the latest one
//! - a lone `]` in text is an error
//! - inside a `link=` value, brackets are literal as long as they balance;
//!   the value ends at whitespace or at the `]` closing the tag

use super::error::MarkupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Text(String),
    Open(String),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Character offset of the token's first character
    pub position: usize,
}

pub(crate) struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    failed: bool,
}

impl Tokenizer {
    pub fn new(markup: &str) -> Self {
        Self {
            chars: markup.chars().collect(),
            pos: 0,
            failed: false,
        }
    }

    /// Number of characters in the input.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    fn peek_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn read_text(&mut self) -> Result<Token, MarkupError> {
        let start = self.pos;
        let mut text = String::new();
        while let Some(c) = self.peek_at(self.pos) {
            match c {
                '[' if self.peek_at(self.pos + 1) == Some('[') => {
                    text.push('[');
                    self.pos += 2;
                }
                '[' => break,
                ']' if self.peek_at(self.pos + 1) == Some(']') => {
                    text.push(']');
                    self.pos += 2;
                }
                ']' => return Err(MarkupError::UnescapedBracket { position: self.pos }),
                _ => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
        Ok(Token {
            kind: TokenKind::Text(text),
            position: start,
        })
    }

    fn read_tag(&mut self) -> Result<Token, MarkupError> {
        let start = self.pos;
        self.pos += 1;

        let mut content = String::new();
        let mut in_link = false;
        let mut depth = 0usize;

        loop {
            let Some(c) = self.peek_at(self.pos) else {
                return Err(MarkupError::MalformedTag { position: start });
            };
            self.pos += 1;

            if in_link {
                match c {
                    '[' => depth += 1,
                    ']' if depth > 0 => depth -= 1,
                    ']' => break,
                    c if c.is_whitespace() => in_link = false,
                    _ => {}
                }
                content.push(c);
                continue;
            }

            match c {
                ']' => break,
                '[' => {
                    return Err(MarkupError::MalformedTag {
                        position: self.pos - 1,
                    })
                }
                _ => {
                    content.push(c);
                    if starts_link_value(&content) {
                        in_link = true;
                    }
                }
            }
        }

        let content = content.trim();
        if content.is_empty() {
            return Err(MarkupError::MalformedTag { position: start });
        }
        let kind = if content.starts_with('/') {
            TokenKind::Close
        } else {
            TokenKind::Open(content.to_string())
        };
        Ok(Token {
            kind,
            position: start,
        })
    }
}

/// Whether the tag content so far ends with a `link=` token.
fn starts_link_value(content: &str) -> bool {
    let lower = content.to_ascii_lowercase();
    match lower.strip_suffix("link=") {
        Some(before) => before.is_empty() || before.ends_with(char::is_whitespace),
        None => false,
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.chars.len() {
            return None;
        }
        let result = if self.chars[self.pos] == '[' && self.peek_at(self.pos + 1) != Some('[') {
            self.read_tag()
        } else {
            self.read_text()
        };
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
