//! The closed syllable grammar: initial and rime tables and the regex built
//! from them.
//!
//! Both the grammar and the IPA lookups are derived from the same two tables,
//! so anything the grammar matches has an IPA rendering.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::regularize::NULL_INITIAL;

/// Initial spellings and their IPA, one symbol per space-separated segment.
pub const INITIALS: &[(&str, &str)] = &[
    (NULL_INITIAL, "ʔ"),
    ("b", "p"),
    ("p", "p h"),
    ("m", "m"),
    ("f", "f"),
    ("d", "t"),
    ("t", "t h"),
    ("n", "n"),
    ("l", "l"),
    ("g", "k"),
    ("k", "k h"),
    ("h", "x"),
    ("j", "tɕ"),
    ("q", "tɕ h"),
    ("x", "ɕ"),
    ("zh", "tʃ"),
    ("ch", "tʃ h"),
    ("sh", "ʂ"),
    ("r", "ɹ"),
    ("z", "ts"),
    ("c", "ts h"),
    ("s", "s"),
    ("y", "j"),
    ("w", "w"),
];

/// Rime spellings (after regularization) and their IPA.
pub const RIMES: &[(&str, &str)] = &[
    ("ɨ", "ɨ"),
    ("a", "a"),
    ("ai", "aɪ"),
    ("an", "a n"),
    ("ang", "a ŋ"),
    ("ao", "aʊ"),
    ("e", "ə"),
    ("ei", "eɪ"),
    ("en", "ə n"),
    ("eng", "ə ŋ"),
    ("er", "ɚ"),
    ("i", "i"),
    ("ia", "j a"),
    ("iang", "j a ŋ"),
    ("iao", "j aʊ"),
    ("ie", "j ɛ"),
    ("ien", "j ɛ n"),
    ("in", "i n"),
    ("ing", "i ŋ"),
    ("iong", "j oʊ ŋ"),
    ("iu", "j oʊ"),
    ("o", "ɔ"),
    ("ou", "oʊ"),
    ("ong", "ʊ ŋ"),
    ("u", "u"),
    ("ua", "w a"),
    ("uai", "w aɪ"),
    ("uan", "w a n"),
    ("uang", "w a ŋ"),
    ("ui", "w eɪ"),
    ("un", "w ə n"),
    ("uo", "w ɔ"),
    ("v", "y"),
    ("ve", "y ɛ"),
    ("vn", "y n"),
    ("ven", "y ɛ n"),
];

/// Suffix marking a rhotacized (erhua) syllable.
pub const RETROFLEX_MARKER: &str = "r";

static INITIAL_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| INITIALS.iter().copied().collect());

static RIME_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| RIMES.iter().copied().collect());

/// A syllable onset, always a key of [`INITIALS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Initial(&'static str);

impl Initial {
    /// Looks up a spelling in the initial table.
    pub fn lookup(spelling: &str) -> Option<Self> {
        INITIAL_INDEX
            .get_key_value(spelling)
            .map(|(key, _)| Initial(*key))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn ipa(&self) -> &'static str {
        INITIAL_INDEX[self.0]
    }
}

/// A vowel nucleus plus optional coda, always a key of [`RIMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Rime(&'static str);

impl Rime {
    /// Looks up a spelling in the rime table.
    pub fn lookup(spelling: &str) -> Option<Self> {
        RIME_INDEX.get_key_value(spelling).map(|(key, _)| Rime(*key))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn ipa(&self) -> &'static str {
        RIME_INDEX[self.0]
    }
}

/// Builds a regex alternation over `keys`, longest first so that `zh` beats
/// `z` and `iang` beats `i`. Ties are broken alphabetically to keep the
/// pattern stable.
fn alternation<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    let mut keys: Vec<&str> = keys.collect();
    keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    keys.iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|")
}

/// `^(initial)(rime)(r?)([1-5])$`
pub static SYLLABLE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "^({})({})({}?)([1-5])$",
        alternation(INITIALS.iter().map(|(key, _)| *key)),
        alternation(RIMES.iter().map(|(key, _)| *key)),
        regex::escape(RETROFLEX_MARKER),
    );
    Regex::new(&pattern).expect("syllable grammar is a valid regex")
});
