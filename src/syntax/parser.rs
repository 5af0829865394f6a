//! Syllable decomposition.
//!
//! Splits a regularized token into initial, rime, retroflex flag and tone by
//! matching it against [`SYLLABLE`](super::grammar::SYLLABLE).

use std::fmt;

use serde::Serialize;

use super::grammar::{Initial, Rime, RETROFLEX_MARKER, SYLLABLE};
use crate::errors::{PinyinError, SourceContext};

/// Tone number, 1 through 4 plus 5 for the neutral tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tone(u8);

impl Tone {
    pub const NEUTRAL: Tone = Tone(5);

    pub fn new(digit: u8) -> Option<Self> {
        (1..=5).contains(&digit).then_some(Tone(digit))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fully decomposed syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedSyllable {
    pub initial: Initial,
    pub rime: Rime,
    pub retroflex: bool,
    pub tone: Tone,
}

impl ParsedSyllable {
    /// Reassembles the regularized spelling this syllable was parsed from.
    pub fn spelling(&self) -> String {
        let marker = if self.retroflex { RETROFLEX_MARKER } else { "" };
        format!(
            "{}{}{}{}",
            self.initial.as_str(),
            self.rime.as_str(),
            marker,
            self.tone
        )
    }
}

impl fmt::Display for ParsedSyllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}

/// Parses a regularized token. The whole token must match.
pub fn parse(token: &str) -> Result<ParsedSyllable, PinyinError> {
    parse_in(token, token, &SourceContext::from_token(token), 0)
}

/// Parses `regularized`, reporting failures against the raw `token` found at
/// `offset` bytes into `ctx`.
pub(crate) fn parse_in(
    regularized: &str,
    token: &str,
    ctx: &SourceContext,
    offset: usize,
) -> Result<ParsedSyllable, PinyinError> {
    let unrecognized = || PinyinError::unrecognized(token, regularized, ctx, offset);

    let caps = SYLLABLE.captures(regularized).ok_or_else(unrecognized)?;
    let initial = Initial::lookup(&caps[1]).ok_or_else(unrecognized)?;
    let rime = Rime::lookup(&caps[2]).ok_or_else(unrecognized)?;
    let retroflex = !caps[3].is_empty();
    let tone = caps[4]
        .chars()
        .next()
        .and_then(Tone::from_char)
        .ok_or_else(unrecognized)?;

    Ok(ParsedSyllable {
        initial,
        rime,
        retroflex,
        tone,
    })
}
