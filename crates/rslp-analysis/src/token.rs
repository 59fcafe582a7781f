//! A single token: reusable char buffer, logical length, keyword flag.

use std::fmt;

/// A token whose first `len` chars are its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    buffer: Vec<char>,
    len: usize,
    keyword: bool,
}

impl Token {
    pub fn new(text: &str) -> Self {
        let buffer: Vec<char> = text.chars().collect();
        Self {
            len: buffer.len(),
            buffer,
            keyword: false,
        }
    }

    /// The live chars `[0, len)`.
    pub fn as_chars(&self) -> &[char] {
        &self.buffer[..self.len]
    }

    pub fn text(&self) -> String {
        self.as_chars().iter().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keyword tokens are exempt from stemming.
    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    pub fn set_keyword(&mut self, keyword: bool) {
        self.keyword = keyword;
    }

    /// Truncate the token to `len` chars (clamped to the buffer).
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(self.buffer.len());
    }

    /// The backing buffer and current length, for in-place rewriting.
    pub fn buffer_mut(&mut self) -> (&mut Vec<char>, usize) {
        (&mut self.buffer, self.len)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.as_chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token() {
        let token = Token::new("ação");
        assert_eq!(token.len(), 4);
        assert_eq!(token.text(), "ação");
        assert!(!token.is_keyword());
        assert!(Token::new("").is_empty());
    }

    #[test]
    fn test_set_len_truncates_and_clamps() {
        let mut token = Token::from("casas");
        token.set_len(3);
        assert_eq!(token.to_string(), "cas");
        token.set_len(99);
        assert_eq!(token.text(), "casas");
    }
}
