//! RSLP stemmer for Brazilian Portuguese.
//!
//! Reduces inflected word forms to a common stem by running seven ordered
//! suffix-rewrite stages (plural, feminine, adverb, augmentative/diminutive,
//! noun, verb, vowel) and finally folding diacritics.
//!
//! Based on Orengo & Huyck, "A Stemming Algorithm for the Portuguese
//! Language" (SPIRE 2001), with the later exception lists.
//!
//! ```
//! use rslp_stem::Stemmer;
//!
//! let stemmer = Stemmer::new();
//! assert_eq!(stemmer.stem_word("cantaríamos"), "cant");
//!
//! // In place, over a caller-owned buffer.
//! let mut term: Vec<char> = "bons".chars().collect();
//! let len = stemmer.stem(&mut term, 4);
//! assert_eq!(term[..len].iter().collect::<String>(), "bom");
//! ```

pub mod buffer;
pub mod fold;
pub mod rule;
pub mod rules;
pub mod stemmer;

pub use buffer::CharBuffer;
pub use rule::{Reduction, Rule, RuleSet};
pub use stemmer::{Stage, StageStep, StemTrace, Stemmer};

/// Stem a single word with the default stemmer.
pub fn stem(word: &str) -> String {
    Stemmer::new().stem_word(word)
}
