//! Adverb reduction.

use crate::rule::{Rule, RuleSet};

pub static ADVERB: RuleSet = RuleSet::new(
    "adverb",
    &[
        Rule::strip("mente", 9).except(&["experimente"]),
    ],
);
