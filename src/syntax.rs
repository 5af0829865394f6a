//! Syntax module: turning raw pinyin tokens into decomposed syllables.
//!
//! - [`regularize`] rewrites orthographic shortcuts so one grammar fits all syllables.
//! - [`grammar`] holds the initial and rime tables and the syllable regex.
//! - [`parser`] matches a regularized token and extracts its fields.

pub mod grammar;
pub mod parser;
pub mod regularize;

pub use grammar::{Initial, Rime, INITIALS, RIMES};
pub use parser::{parse, ParsedSyllable, Tone};
pub use regularize::{regularize, NULL_INITIAL};
