//! Diacritic folding over Latin-1 Supplement and Latin Extended-A.

use once_cell::sync::Lazy;

/// First code point covered by the table.
pub const FOLD_START: char = '\u{00C0}';
/// Last code point covered by the table.
pub const FOLD_END: char = '\u{017F}';

/// Unaccented forms for U+00C0..=U+017F, 16 code points per row.
///
/// Letters without a plain equivalent (×, Ø, ß, ð, ÷, ø, þ) map to
/// themselves.
const TABLE_00C0: &str = concat!(
    "AAAAAAACEEEEIIII",
    "DNOOOOO\u{00d7}\u{00d8}UUUUYI\u{00df}",
    "aaaaaaaceeeeiiii",
    "\u{00f0}nooooo\u{00f7}\u{00f8}uuuuy\u{00fe}y",
    "AaAaAaCcCcCcCcDd",
    "DdEeEeEeEeEeGgGg",
    "GgGgHhHhIiIiIiIi",
    "IiJjJjKkkLlLlLlL",
    "lLlNnNnNnnNnOoOo",
    "OoOoRrRrRrSsSsSs",
    "SsTtTtTtUuUuUuUu",
    "UuUuWwYyYZzZzZzF",
);

static FOLD_TABLE: Lazy<Vec<char>> = Lazy::new(|| TABLE_00C0.chars().collect());

/// Fold a single char; chars outside the table pass through.
pub fn fold_char(c: char) -> char {
    if (FOLD_START..=FOLD_END).contains(&c) {
        FOLD_TABLE[c as usize - FOLD_START as usize]
    } else {
        c
    }
}

/// Fold every char of `chars` in place.
pub fn fold(chars: &mut [char]) {
    for c in chars.iter_mut() {
        *c = fold_char(*c);
    }
}
