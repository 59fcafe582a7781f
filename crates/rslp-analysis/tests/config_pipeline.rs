//! Keyword config loaded from disk drives the stem filter.

use rslp_analysis::{analyze, KeywordSet, Token, TokenStreamExt};
use rslp_core::AnalysisConfig;

#[test]
fn test_keywords_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis.json");
    std::fs::write(
        &path,
        r#"{ "keywords": ["cantando", "Meninas"], "ignore_case": false }"#,
    )
    .unwrap();

    let config = AnalysisConfig::load(&path).unwrap();
    let stems = analyze(["cantando", "partindo", "Meninas", "meninas"], &config);
    assert_eq!(stems, vec!["cantando", "part", "Meninas", "menin"]);
}

#[test]
fn test_marker_then_filter_preserves_order_and_flags() {
    let keywords = KeywordSet::new(["bons"], false);
    let tokens: Vec<Token> = ["bons", "bons", "casas"]
        .into_iter()
        .map(Token::from)
        .enumerate()
        .map(|(i, mut t)| {
            // The second token arrives pre-flagged by an upstream filter.
            t.set_keyword(i == 1);
            t
        })
        .mark_keywords(&keywords)
        .stem()
        .collect();

    let texts: Vec<String> = tokens.iter().map(Token::text).collect();
    assert_eq!(texts, vec!["bons", "bons", "cas"]);
    assert!(tokens.iter().take(2).all(Token::is_keyword));
    assert!(!tokens[2].is_keyword());
}

#[test]
fn test_empty_stream() {
    let stems = analyze(std::iter::empty(), &AnalysisConfig::default());
    assert!(stems.is_empty());
}
