//! Suffix-rewrite rules and the ordered rule sets built from them.

use crate::buffer::CharBuffer;

const fn char_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        // Count every byte that is not a UTF-8 continuation byte.
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}

/// One suffix rewrite: when a word of at least `min_len` chars ends in
/// `suffix` and is not listed in `exceptions`, the suffix is replaced by
/// `replacement` (or removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    suffix: &'static str,
    suffix_len: usize,
    min_len: usize,
    replacement: Option<&'static str>,
    replacement_len: usize,
    /// Whole words the rule must leave alone, sorted by code point.
    exceptions: Option<&'static [&'static str]>,
}

impl Rule {
    /// A rule that deletes `suffix`.
    pub const fn strip(suffix: &'static str, min_len: usize) -> Self {
        Self {
            suffix,
            suffix_len: char_count(suffix),
            min_len,
            replacement: None,
            replacement_len: 0,
            exceptions: None,
        }
    }

    /// A rule that rewrites `suffix` to `replacement`.
    pub const fn replace(suffix: &'static str, min_len: usize, replacement: &'static str) -> Self {
        Self {
            suffix,
            suffix_len: char_count(suffix),
            min_len,
            replacement: Some(replacement),
            replacement_len: char_count(replacement),
            exceptions: None,
        }
    }

    /// Protect the given words from this rule. `words` must be sorted.
    pub const fn except(self, words: &'static [&'static str]) -> Self {
        Self {
            exceptions: Some(words),
            ..self
        }
    }

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Suffix length in chars.
    pub fn suffix_len(&self) -> usize {
        self.suffix_len
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn replacement(&self) -> Option<&'static str> {
        self.replacement
    }

    /// Replacement length in chars (0 when the suffix is deleted).
    pub fn replacement_len(&self) -> usize {
        self.replacement_len
    }

    pub fn exceptions(&self) -> Option<&'static [&'static str]> {
        self.exceptions
    }

    /// Exact, case- and accent-sensitive lookup in the exception list.
    pub fn is_exception(&self, word: &[char]) -> bool {
        self.exceptions.map_or(false, |words| {
            words
                .binary_search_by(|probe| probe.chars().cmp(word.iter().copied()))
                .is_ok()
        })
    }

    fn matches_suffix(&self, chars: &[char], len: usize) -> bool {
        let Some(live) = chars.get(..len) else {
            return false;
        };
        live.len() >= self.suffix_len
            && live[live.len() - self.suffix_len..]
                .iter()
                .copied()
                .eq(self.suffix.chars())
    }

    /// Try the rule on the live region `[0, len)` of `term`.
    ///
    /// Returns the new logical length when the rule fired. When the
    /// replacement is longer than the suffix the buffer is asked to grow
    /// first; a fixed buffer that cannot hold the result makes the rule
    /// report not-applied and leaves the term untouched.
    pub fn apply<B: CharBuffer + ?Sized>(&self, term: &mut B, len: usize) -> Option<usize> {
        if len < self.min_len || !self.matches_suffix(term.as_chars(), len) {
            return None;
        }
        if self.is_exception(&term.as_chars()[..len]) {
            return None;
        }

        let start = len - self.suffix_len;
        let new_len = start + self.replacement_len;
        if !term.reserve_len(new_len) {
            return None;
        }
        if let Some(replacement) = self.replacement {
            for (slot, c) in term.as_chars_mut()[start..new_len]
                .iter_mut()
                .zip(replacement.chars())
            {
                *slot = c;
            }
        }
        Some(new_len)
    }
}

/// The rule that fired and the resulting logical length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    pub rule: &'static Rule,
    pub len: usize,
}

/// An ordered, named list of rules where the first rule that fires wins.
#[derive(Debug)]
pub struct RuleSet {
    name: &'static str,
    rules: &'static [Rule],
}

impl RuleSet {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Apply the first matching rule, in declaration order.
    pub fn process<B: CharBuffer + ?Sized>(&self, term: &mut B, len: usize) -> Option<Reduction> {
        self.rules.iter().find_map(|rule| {
            rule.apply(term, len)
                .map(|new_len| Reduction { rule, len: new_len })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn live(term: &[char], len: usize) -> String {
        term[..len].iter().collect()
    }

    #[test]
    fn test_char_count() {
        assert_eq!(Rule::strip("ões", 6).suffix_len(), 3);
        assert_eq!(Rule::replace("ã", 3, "ão").replacement_len(), 2);
    }

    #[test]
    fn test_apply_replacement() {
        let rule = Rule::replace("ns", 3, "m");
        let mut term = chars("bons");
        assert_eq!(rule.apply(&mut term, 4), Some(3));
        assert_eq!(live(&term, 3), "bom");
    }

    #[test]
    fn test_apply_strip() {
        let rule = Rule::strip("mente", 9);
        let mut term = chars("felizmente");
        assert_eq!(rule.apply(&mut term, 10), Some(5));
        assert_eq!(live(&term, 5), "feliz");
    }

    #[test]
    fn test_min_len_gate() {
        let rule = Rule::strip("mente", 9);
        let mut term = chars("demente");
        assert_eq!(rule.apply(&mut term, 7), None);
        assert_eq!(live(&term, 7), "demente");
    }

    #[test]
    fn test_suffix_is_ordinal() {
        let rule = Rule::strip("ado", 5);
        let mut term = chars("CANSADO");
        assert_eq!(rule.apply(&mut term, 7), None);

        let rule = Rule::strip("ão", 5);
        let mut term = chars("balao");
        assert_eq!(rule.apply(&mut term, 5), None);
    }

    #[test]
    fn test_exception_blocks_rule() {
        let rule = Rule::replace("ada", 5, "ado").except(&["pitada"]);
        let mut term = chars("pitada");
        assert_eq!(rule.apply(&mut term, 6), None);
        assert_eq!(live(&term, 6), "pitada");

        let mut term = chars("coitada");
        assert_eq!(rule.apply(&mut term, 7), Some(7));
        assert_eq!(live(&term, 7), "coitado");
    }

    #[test]
    fn test_exception_is_whole_word() {
        let rule = Rule::strip("s", 3).except(&["mais", "pires"]);
        assert!(rule.is_exception(&chars("mais")));
        assert!(!rule.is_exception(&chars("demais")));
        assert!(!rule.is_exception(&chars("Mais")));
        assert!(!rule.is_exception(&chars("mai")));
    }

    #[test]
    fn test_stale_tail_ignored() {
        // Only [0, len) is live; "casas" minus its last char is "casa".
        let rule = Rule::strip("s", 3);
        let mut term = chars("casas");
        assert_eq!(rule.apply(&mut term, 4), None);

        let rule = Rule::strip("a", 4);
        assert_eq!(rule.apply(&mut term, 4), Some(3));
        assert_eq!(live(&term, 3), "cas");
    }

    #[test]
    fn test_longer_replacement_grows_vec() {
        let rule = Rule::replace("ã", 3, "ão");
        let mut term = chars("vilã");
        assert_eq!(rule.apply(&mut term, 4), Some(5));
        assert_eq!(live(&term, 5), "vilão");
    }

    #[test]
    fn test_longer_replacement_fails_closed_on_fixed_buffer() {
        let rule = Rule::replace("ã", 3, "ão");
        let mut term = ['v', 'i', 'l', 'ã'];
        assert_eq!(rule.apply(&mut term[..], 4), None);
        assert_eq!(term, ['v', 'i', 'l', 'ã']);

        // Spare physical capacity is enough.
        let mut term = ['v', 'i', 'l', 'ã', ' ', ' '];
        assert_eq!(rule.apply(&mut term[..], 4), Some(5));
        assert_eq!(live(&term, 5), "vilão");
    }

    #[test]
    fn test_len_beyond_buffer_does_not_match() {
        let rule = Rule::strip("s", 1);
        let mut term = ['s'];
        assert_eq!(rule.apply(&mut term[..], 2), None);
    }

    #[test]
    fn test_rule_set_first_match_wins() {
        static ORDERED: RuleSet = RuleSet::new(
            "ordered",
            &[Rule::strip("esse", 6), Rule::strip("sse", 5), Rule::strip("e", 3)],
        );

        let mut term = chars("bebesse");
        let reduction = ORDERED.process(&mut term, 7).unwrap();
        assert_eq!(reduction.rule.suffix(), "esse");
        assert_eq!(live(&term, reduction.len), "beb");

        let mut term = chars("disse");
        let reduction = ORDERED.process(&mut term, 5).unwrap();
        assert_eq!(reduction.rule.suffix(), "sse");
        assert_eq!(live(&term, reduction.len), "di");
    }

    #[test]
    fn test_rule_set_falls_through() {
        static ONLY_PLURAL: RuleSet = RuleSet::new("only", &[Rule::strip("s", 3)]);
        let mut term = chars("casa");
        assert_eq!(ONLY_PLURAL.process(&mut term, 4), None);
    }
}
