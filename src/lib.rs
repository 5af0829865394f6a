pub use crate::errors::{PinyinError, SourceContext};
pub use crate::render::render;
pub use crate::syntax::{parse, regularize, ParsedSyllable};

pub mod cli;
pub mod corpus;
pub mod errors;
pub mod render;
pub mod syntax;
pub mod test_harness;

/// Converts one tone-numbered pinyin syllable to space-separated IPA.
///
/// ```
/// assert_eq!(pinyin_ipa::convert("bo1").unwrap(), "p w ɔ");
/// assert!(pinyin_ipa::convert("xyz9").is_err());
/// ```
pub fn convert(pinyin: &str) -> Result<String, PinyinError> {
    convert_in(pinyin, &SourceContext::from_token(pinyin), 0)
}

/// Like [`convert`], but failures point at `offset` bytes into `ctx`.
pub fn convert_in(pinyin: &str, ctx: &SourceContext, offset: usize) -> Result<String, PinyinError> {
    let regularized = regularize(pinyin);
    let syllable = syntax::parser::parse_in(&regularized, pinyin, ctx, offset)?;
    Ok(render(&syllable))
}

/// Converts every whitespace-separated syllable in `text` and joins the IPA
/// groups with single spaces.
pub fn convert_sequence(text: &str) -> Result<String, PinyinError> {
    let ctx = SourceContext::from_token(text);
    let base = text.as_ptr() as usize;
    let groups = text
        .split_whitespace()
        .map(|token| convert_in(token, &ctx, token.as_ptr() as usize - base))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(groups.join(" "))
}
