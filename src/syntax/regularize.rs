//! Spelling regularization.
//!
//! Standard pinyin orthography hides part of the syllable structure (`bo` is
//! really `buo`, `ju` is really `jü`, `zhi` has no `i` vowel at all). These
//! rewrites undo that so one grammar covers every syllable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marks a syllable with no consonant onset.
pub const NULL_INITIAL: &str = "ʔ";

/// A rewrite applied once, at its first match.
struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("regularization pattern is valid"),
            replacement,
        }
    }

    fn apply(&self, pinyin: &str) -> String {
        self.pattern.replace(pinyin, self.replacement).into_owned()
    }
}

// The regex crate has no lookahead, so "not followed by" is written as a
// captured following char (or end of token) that is put back unchanged.
static REWRITES: Lazy<[Rewrite; 4]> = Lazy::new(|| {
    [
        // bo -> buo
        Rewrite::new(r"^([bpmf])o([^u]|$)", "${1}uo${2}"),
        // ju -> jv
        Rewrite::new(r"^([jqxy])u", "${1}v"),
        // zhi -> zhɨ
        Rewrite::new(r"^([zcs]h?|r)i", "${1}ɨ"),
        // ian -> ien, but iang stays
        Rewrite::new(r"([iv])an([^g]|$)", "${1}en${2}"),
    ]
});

/// Vowels that can begin a token with no consonant onset. Standard spelling
/// only lets `a`, `o` and `e` do so; `i` covers bare rimes like `ian`.
const ONSETLESS_VOWELS: [char; 4] = ['a', 'o', 'e', 'i'];

/// Rewrites known spelling irregularities in `pinyin`. Never fails.
pub fn regularize(pinyin: &str) -> String {
    let mut pinyin = pinyin.to_string();
    for rewrite in REWRITES.iter() {
        pinyin = rewrite.apply(&pinyin);
    }
    if pinyin.starts_with(ONSETLESS_VOWELS) {
        pinyin.insert_str(0, NULL_INITIAL);
    }
    pinyin
}
