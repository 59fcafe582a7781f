//! The eight-stage RSLP pipeline.
//!
//! Stages run in a fixed order, each gated on the current logical length
//! (and, for plural and feminine, the last char). Noun and verb reduction
//! are alternatives: once one fires, the later ones are skipped. Diacritic
//! folding always runs last over the live region.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::buffer::CharBuffer;
use crate::fold::{fold, fold_char};
use crate::rule::{Rule, RuleSet};
use crate::rules;

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Plural,
    Feminine,
    Adverb,
    Augmentative,
    Noun,
    Verb,
    Vowel,
    Fold,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 8] = [
        Stage::Plural,
        Stage::Feminine,
        Stage::Adverb,
        Stage::Augmentative,
        Stage::Noun,
        Stage::Verb,
        Stage::Vowel,
        Stage::Fold,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Plural => "plural",
            Stage::Feminine => "feminine",
            Stage::Adverb => "adverb",
            Stage::Augmentative => "augmentative",
            Stage::Noun => "noun",
            Stage::Verb => "verb",
            Stage::Vowel => "vowel",
            Stage::Fold => "fold",
        }
    }

    /// The rule table behind this stage (`None` for folding).
    pub fn rule_set(&self) -> Option<&'static RuleSet> {
        match self {
            Stage::Plural => Some(&rules::PLURAL),
            Stage::Feminine => Some(&rules::FEMININE),
            Stage::Adverb => Some(&rules::ADVERB),
            Stage::Augmentative => Some(&rules::AUGMENTATIVE),
            Stage::Noun => Some(&rules::NOUN),
            Stage::Verb => Some(&rules::VERB),
            Stage::Vowel => Some(&rules::VOWEL),
            Stage::Fold => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A stage that changed the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStep {
    pub stage: Stage,
    /// Matched suffix; `None` for the fold stage.
    pub suffix: Option<String>,
    pub replacement: Option<String>,
    pub before: String,
    pub after: String,
}

/// Stage-by-stage record of how a word was reduced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTrace {
    pub word: String,
    pub stem: String,
    pub steps: Vec<StageStep>,
}

impl StemTrace {
    pub fn fired(&self, stage: Stage) -> bool {
        self.steps.iter().any(|s| s.stage == stage)
    }
}

/// RSLP stemmer for Brazilian Portuguese.
///
/// Stateless: the rule tables are process-wide statics, so one value can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stemmer;

fn last_char<B: CharBuffer + ?Sized>(term: &B, len: usize) -> Option<char> {
    len.checked_sub(1).and_then(|i| term.as_chars().get(i).copied())
}

/// Feminine gate. A trailing `ã` bypasses the length check.
fn attempts_feminine(last: Option<char>, len: usize) -> bool {
    (len >= 3 && last == Some('a')) || last == Some('ã')
}

impl Stemmer {
    pub const fn new() -> Self {
        Stemmer
    }

    /// Stem the live region `[0, len)` of `term` in place and return the new
    /// logical length. Chars past the returned length are stale.
    ///
    /// A `len` larger than the buffer is clamped to the buffer size.
    pub fn stem<B: CharBuffer + ?Sized>(&self, term: &mut B, len: usize) -> usize {
        self.run(term, len, |_, _, _| {})
    }

    /// Stem an owned word.
    pub fn stem_word(&self, word: &str) -> String {
        let mut term: Vec<char> = word.chars().collect();
        let len = term.len();
        let len = self.stem(&mut term, len);
        term[..len].iter().collect()
    }

    /// Stem `word`, recording every stage that changed it.
    pub fn explain(&self, word: &str) -> StemTrace {
        let mut term: Vec<char> = word.chars().collect();
        let len = term.len();
        let mut steps = Vec::new();
        let mut before = word.to_string();

        let len = self.run(&mut term, len, |stage, rule, live| {
            let after: String = live.iter().collect();
            steps.push(StageStep {
                stage,
                suffix: rule.map(|r| r.suffix().to_string()),
                replacement: rule.and_then(Rule::replacement).map(str::to_string),
                before: std::mem::replace(&mut before, after.clone()),
                after,
            });
        });

        StemTrace {
            word: word.to_string(),
            stem: term[..len].iter().collect(),
            steps,
        }
    }

    fn run<B, F>(&self, term: &mut B, len: usize, mut on_step: F) -> usize
    where
        B: CharBuffer + ?Sized,
        F: FnMut(Stage, Option<&'static Rule>, &[char]),
    {
        let mut len = len;
        let capacity = term.physical_len();
        if len > capacity {
            warn!(len, capacity, "Logical length exceeds buffer, clamping");
            len = capacity;
        }

        if len >= 3 && last_char(term, len) == Some('s') {
            reduce(Stage::Plural, term, &mut len, &mut on_step);
        }
        if attempts_feminine(last_char(term, len), len) {
            reduce(Stage::Feminine, term, &mut len, &mut on_step);
        }
        if len >= 9 {
            reduce(Stage::Adverb, term, &mut len, &mut on_step);
        }
        if len >= 5 {
            reduce(Stage::Augmentative, term, &mut len, &mut on_step);
        }

        let mut changed = len >= 3 && reduce(Stage::Noun, term, &mut len, &mut on_step);
        if !changed && len >= 4 {
            changed = reduce(Stage::Verb, term, &mut len, &mut on_step);
        }
        if !changed && len >= 4 {
            reduce(Stage::Vowel, term, &mut len, &mut on_step);
        }

        let live = &mut term.as_chars_mut()[..len];
        if live.iter().any(|&c| fold_char(c) != c) {
            fold(live);
            on_step(Stage::Fold, None, live);
        }

        len
    }
}

/// Run one stage's rule set, updating `len` if a rule fired.
fn reduce<B, F>(stage: Stage, term: &mut B, len: &mut usize, on_step: &mut F) -> bool
where
    B: CharBuffer + ?Sized,
    F: FnMut(Stage, Option<&'static Rule>, &[char]),
{
    let Some(set) = stage.rule_set() else {
        return false;
    };
    match set.process(term, *len) {
        Some(reduction) => {
            trace!(
                stage = stage.name(),
                suffix = reduction.rule.suffix(),
                from = *len,
                to = reduction.len,
                "Rule applied"
            );
            *len = reduction.len;
            on_step(stage, Some(reduction.rule), &term.as_chars()[..*len]);
            true
        }
        None => false,
    }
}
