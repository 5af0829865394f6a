//! Pinyin-IPA error handling.
//!
//! Every failure in the crate is a [`PinyinError`]. Errors carry a
//! [`SourceContext`] so that `miette` can point at the offending token,
//! whether it came from the command line or from a line of a transcript file.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Where a token came from, kept for error reporting.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Context for a transcript line: named `file:line`.
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Context for a bare token handed to [`crate::convert`].
    pub fn from_token(token: &str) -> Self {
        Self {
            name: "<input>".to_string(),
            content: token.to_string(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Error, Diagnostic, Debug)]
pub enum PinyinError {
    #[error("unrecognized syllable '{token}'")]
    #[diagnostic(code(pinyin_ipa::syntax::unrecognized))]
    UnrecognizedSyllable {
        /// The token as the caller supplied it.
        token: String,
        /// The token after spelling regularization, which is what the grammar saw.
        regularized: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("expected initial + rime + optional 'r' + tone 1-5")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("malformed record on line {line}: {reason}")]
    #[diagnostic(
        code(pinyin_ipa::corpus::malformed),
        help("records look like `<utterance_id> <pinyin> <pinyin> ...`")
    )]
    MalformedRecord {
        line: usize,
        reason: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("I/O error on {}", path.display())]
    #[diagnostic(code(pinyin_ipa::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PinyinError {
    /// Builds an `UnrecognizedSyllable` for `token` found at `offset` bytes into `ctx`.
    pub fn unrecognized(
        token: &str,
        regularized: &str,
        ctx: &SourceContext,
        offset: usize,
    ) -> Self {
        PinyinError::UnrecognizedSyllable {
            token: token.to_string(),
            regularized: regularized.to_string(),
            src: ctx.to_named_source(),
            span: SourceSpan::from((offset, token.len())),
            help: Some(unrecognized_help(regularized)),
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>, ctx: &SourceContext) -> Self {
        PinyinError::MalformedRecord {
            line,
            reason: reason.into(),
            src: ctx.to_named_source(),
            span: SourceSpan::from((0, ctx.content.len())),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PinyinError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, PinyinError::UnrecognizedSyllable { .. })
    }

    /// The diagnostic code as a string, e.g. `pinyin_ipa::syntax::unrecognized`.
    pub fn error_code(&self) -> Option<String> {
        self.code().map(|code| code.to_string())
    }
}

/// Guesses why a regularized token failed to match the syllable grammar.
fn unrecognized_help(regularized: &str) -> String {
    let reason = match regularized.chars().last() {
        None => "the token is empty".to_string(),
        Some(c) if c.is_ascii_digit() && !('1'..='5').contains(&c) => {
            format!("tone digit '{c}' is out of range, use 1-5 (5 is neutral)")
        }
        Some(c) if !c.is_ascii_digit() => "syllables must end in a tone digit 1-5".to_string(),
        Some(_) => "no known initial and rime combination spells this syllable".to_string(),
    };
    if regularized.is_empty() {
        reason
    } else {
        format!("{reason} (regularized as '{regularized}')")
    }
}

/// Renders an error as a miette report on stderr.
pub fn print_error(error: PinyinError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
