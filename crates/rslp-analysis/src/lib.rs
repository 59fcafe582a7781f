//! RSLP Analysis — the token-stream side of stemming.
//!
//! Tokens carry their own char buffer and logical length. [`StemFilter`]
//! stems every token in place unless an earlier [`KeywordMarker`] flagged it
//! as a keyword. Tokenization itself is left to the caller.

pub mod filter;
pub mod keyword;
pub mod token;

pub use filter::{analyze, StemFilter, TokenStreamExt};
pub use keyword::{KeywordMarker, KeywordSet};
pub use token::Token;
