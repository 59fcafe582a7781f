//! Final vowel removal, the fallback when neither nouns nor verbs matched.

use crate::rule::{Rule, RuleSet};

pub static VOWEL: RuleSet = RuleSet::new(
    "vowel",
    &[
        Rule::replace("bil", 5, "vel"),
        Rule::replace("gue", 5, "g").except(&["gangue", "jegue"]),
        Rule::strip("á", 4),
        Rule::strip("ê", 4).except(&["bebê"]),
        Rule::strip("a", 4).except(&["ásia"]),
        Rule::strip("e", 4),
        Rule::strip("o", 4).except(&["ão"]),
    ],
);
