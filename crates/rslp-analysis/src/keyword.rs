//! Keyword marking: flag tokens that must not be stemmed.

use std::collections::HashSet;

use rslp_core::AnalysisConfig;
use tracing::trace;

use crate::token::Token;

/// Literal set of protected words.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: HashSet<String>,
    ignore_case: bool,
}

fn lowercase(chars: impl Iterator<Item = char>) -> String {
    chars.flat_map(char::to_lowercase).collect()
}

impl KeywordSet {
    pub fn new<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let w = w.as_ref();
                if ignore_case {
                    lowercase(w.chars())
                } else {
                    w.to_string()
                }
            })
            .collect();
        Self { words, ignore_case }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(&config.keywords, config.ignore_case)
    }

    pub fn contains(&self, term: &[char]) -> bool {
        let key = if self.ignore_case {
            lowercase(term.iter().copied())
        } else {
            term.iter().collect()
        };
        self.words.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Iterator adapter that sets the keyword flag on tokens found in a
/// [`KeywordSet`]. Tokens already flagged stay flagged.
pub struct KeywordMarker<'a, I> {
    inner: I,
    keywords: &'a KeywordSet,
}

impl<'a, I> KeywordMarker<'a, I> {
    pub fn new(inner: I, keywords: &'a KeywordSet) -> Self {
        Self { inner, keywords }
    }
}

impl<'a, I: Iterator<Item = Token>> Iterator for KeywordMarker<'a, I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut token = self.inner.next()?;
        if !token.is_keyword() && self.keywords.contains(token.as_chars()) {
            trace!(token = %token, "Marked keyword");
            token.set_keyword(true);
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_exact_match() {
        let set = KeywordSet::new(["Brasil", "meninas"], false);
        assert!(set.contains(&chars("Brasil")));
        assert!(!set.contains(&chars("brasil")));
        assert!(!set.contains(&chars("menina")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ignore_case() {
        let set = KeywordSet::new(["São Paulo", "ÉPOCA"], true);
        assert!(set.contains(&chars("são paulo")));
        assert!(set.contains(&chars("época")));
        assert!(set.contains(&chars("ÉpOcA")));
    }

    #[test]
    fn test_from_config() {
        let config = AnalysisConfig {
            keywords: vec!["casas".into()],
            ignore_case: false,
        };
        let set = KeywordSet::from_config(&config);
        assert!(set.contains(&chars("casas")));
        assert!(KeywordSet::default().is_empty());
    }

    #[test]
    fn test_marker_flags_tokens() {
        let set = KeywordSet::new(["casas"], false);
        let tokens: Vec<Token> =
            KeywordMarker::new(["casas", "mesas"].into_iter().map(Token::from), &set).collect();
        assert!(tokens[0].is_keyword());
        assert!(!tokens[1].is_keyword());
    }
}
