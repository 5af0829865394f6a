//! IPA rendering of parsed syllables.

use crate::syntax::ParsedSyllable;

/// Rhotacized schwa; a retroflexed `e` rime collapses to this.
const RHOTIC_SCHWA: &str = "ɚ";
/// Appended after any other retroflexed rime.
const RHOTIC_CODA: &str = "ɹ";

/// Renders a syllable as space-separated IPA symbols. The tone is dropped.
pub fn render(syllable: &ParsedSyllable) -> String {
    let init_ipa = syllable.initial.ipa();
    let rime_ipa = syllable.rime.ipa();
    match (syllable.retroflex, syllable.rime.as_str()) {
        (false, _) => format!("{init_ipa} {rime_ipa}"),
        (true, "e") => format!("{init_ipa} {RHOTIC_SCHWA}"),
        (true, _) => format!("{init_ipa} {rime_ipa} {RHOTIC_CODA}"),
    }
}
