//! The stemming token filter.

use rslp_core::AnalysisConfig;
use rslp_stem::Stemmer;
use tracing::debug;

use crate::keyword::{KeywordMarker, KeywordSet};
use crate::token::Token;

/// Iterator adapter that stems each non-keyword token in place.
pub struct StemFilter<I> {
    inner: I,
    stemmer: Stemmer,
}

impl<I> StemFilter<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            stemmer: Stemmer::new(),
        }
    }
}

impl<I: Iterator<Item = Token>> Iterator for StemFilter<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut token = self.inner.next()?;
        if !token.is_keyword() {
            let (buffer, len) = token.buffer_mut();
            let stemmed = self.stemmer.stem(buffer, len);
            token.set_len(stemmed);
        }
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Chainable adapters for token iterators.
pub trait TokenStreamExt: Iterator<Item = Token> + Sized {
    fn mark_keywords(self, keywords: &KeywordSet) -> KeywordMarker<'_, Self> {
        KeywordMarker::new(self, keywords)
    }

    fn stem(self) -> StemFilter<Self> {
        StemFilter::new(self)
    }
}

impl<I: Iterator<Item = Token>> TokenStreamExt for I {}

/// Mark configured keywords, then stem the rest.
pub fn analyze<'w, W>(words: W, config: &AnalysisConfig) -> Vec<String>
where
    W: IntoIterator<Item = &'w str>,
{
    let keywords = KeywordSet::from_config(config);
    let stems: Vec<String> = words
        .into_iter()
        .map(Token::from)
        .mark_keywords(&keywords)
        .stem()
        .map(|t| t.text())
        .collect();
    debug!(tokens = stems.len(), keywords = keywords.len(), "Analyzed tokens");
    stems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_stems_tokens() {
        let stems: Vec<String> = ["bons", "cantaríamos", "mãe"]
            .into_iter()
            .map(Token::from)
            .stem()
            .map(|t| t.text())
            .collect();
        assert_eq!(stems, vec!["bom", "cant", "mae"]);
    }

    #[test]
    fn test_keyword_tokens_pass_through() {
        let mut keyword = Token::new("meninas");
        keyword.set_keyword(true);
        let tokens: Vec<Token> = vec![keyword.clone(), Token::new("meninas")]
            .into_iter()
            .stem()
            .collect();
        assert_eq!(tokens[0], keyword);
        assert_eq!(tokens[1].text(), "menin");
    }

    #[test]
    fn test_filter_grows_token_buffer() {
        let token = std::iter::once(Token::new("vilã")).stem().next().unwrap();
        assert_eq!(token.text(), "vil");
    }

    #[test]
    fn test_analyze_with_config() {
        let config = AnalysisConfig {
            keywords: vec!["CASAS".into()],
            ignore_case: true,
        };
        let stems = analyze(["casas", "mesas", "Casas"], &config);
        assert_eq!(stems, vec!["casas", "mes", "Casas"]);
    }
}
