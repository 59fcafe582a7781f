//! The seven RSLP rule tables, in pipeline order.

mod adverb;
mod augmentative;
mod feminine;
mod noun;
mod plural;
mod verb;
mod vowel;

pub use adverb::ADVERB;
pub use augmentative::AUGMENTATIVE;
pub use feminine::FEMININE;
pub use noun::NOUN;
pub use plural::PLURAL;
pub use verb::VERB;
pub use vowel::VOWEL;

use crate::rule::RuleSet;

/// All rule sets in the order the stemmer consults them.
pub static ALL: [&RuleSet; 7] = [
    &PLURAL,
    &FEMININE,
    &ADVERB,
    &AUGMENTATIVE,
    &NOUN,
    &VERB,
    &VOWEL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_counts() {
        let counts: Vec<usize> = ALL.iter().map(|set| set.rules().len()).collect();
        assert_eq!(counts, vec![11, 15, 1, 23, 84, 101, 7]);
    }

    #[test]
    fn test_suffix_fits_min_len() {
        for set in ALL {
            for rule in set.rules() {
                assert!(!rule.suffix().is_empty(), "{}: empty suffix", set.name());
                assert!(
                    rule.suffix_len() <= rule.min_len(),
                    "{}: -{} requires only {} chars",
                    set.name(),
                    rule.suffix(),
                    rule.min_len()
                );
            }
        }
    }

    #[test]
    fn test_exceptions_sorted() {
        // Lookups binary-search the lists, so unsorted data would hide entries.
        for set in ALL {
            for rule in set.rules() {
                let words = rule.exceptions().unwrap_or(&[]);
                assert!(
                    words.windows(2).all(|w| w[0] < w[1]),
                    "{}: exceptions of -{} not strictly sorted: {:?}",
                    set.name(),
                    rule.suffix(),
                    words
                );
            }
        }
    }

    #[test]
    fn test_only_feminine_tilde_grows() {
        let growing: Vec<(&str, &str)> = ALL
            .iter()
            .flat_map(|set| set.rules().iter().map(move |r| (set.name(), r)))
            .filter(|(_, r)| r.replacement_len() > r.suffix_len())
            .map(|(name, r)| (name, r.suffix()))
            .collect();
        assert_eq!(growing, vec![("feminine", "ã")]);
    }
}
