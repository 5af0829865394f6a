//! Corpus transcript rewriting.
//!
//! A transcript is one record per line, `<utterance_id> <pinyin> <pinyin> ...`.
//! Each record is converted to `<utterance_id> <ipa group> <ipa group> ...`,
//! where every group is itself a space-separated run of IPA symbols.
//!
//! Conversion stops at the first bad record. Lines are only written once they
//! are fully converted, so any partial output stays aligned with its ids.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{PinyinError, SourceContext};

/// Settings for [`rewrite_text_file`].
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Appended to the transcript path to name the renamed original.
    pub backup_suffix: String,
    /// Print converted records to stdout and leave the file untouched.
    pub dry_run: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            backup_suffix: ".old".to_string(),
            dry_run: false,
        }
    }
}

/// What a rewrite did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    pub path: PathBuf,
    pub records: usize,
    /// Where the original went; `None` for a dry run.
    pub backup: Option<PathBuf>,
}

/// Splits on whitespace, yielding each piece with its byte offset into `line`.
fn tokens_with_offsets(line: &str) -> impl Iterator<Item = (usize, &str)> {
    let base = line.as_ptr() as usize;
    line.split_whitespace()
        .map(move |token| (token.as_ptr() as usize - base, token))
}

/// Converts one transcript record. `line_no` is 1-based and only used for
/// error reporting, together with `source_name`.
pub fn convert_record(line: &str, line_no: usize, source_name: &str) -> Result<String, PinyinError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let ctx = SourceContext::from_file(format!("{source_name}:{line_no}"), line);
    let mut tokens = tokens_with_offsets(line);

    let Some((_, utt_id)) = tokens.next() else {
        return Err(PinyinError::malformed(line_no, "empty record", &ctx));
    };

    let mut record = String::from(utt_id);
    let mut groups = 0;
    for (offset, pinyin) in tokens {
        let ipa = crate::convert_in(pinyin, &ctx, offset)?;
        record.push(' ');
        record.push_str(&ipa);
        groups += 1;
    }

    if groups == 0 {
        return Err(PinyinError::malformed(
            line_no,
            format!("utterance '{utt_id}' has no transcription"),
            &ctx,
        ));
    }
    Ok(record)
}

/// Streams records from `reader` to `writer`, one line at a time, in order.
/// Returns the number of records written.
pub fn convert_records<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    source_name: &str,
) -> Result<usize, PinyinError> {
    let io_err = |e: io::Error| PinyinError::io(source_name, e);
    let mut records = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        let record = convert_record(&line, index + 1, source_name)?;
        writeln!(writer, "{record}").map_err(io_err)?;
        records += 1;
    }
    writer.flush().map_err(io_err)?;
    Ok(records)
}

/// Converts the transcript at `path` into `writer` without touching the file.
pub fn convert_file_to<W: Write>(path: &Path, writer: W) -> Result<usize, PinyinError> {
    let file = File::open(path).map_err(|e| PinyinError::io(path, e))?;
    convert_records(BufReader::new(file), writer, &path.display().to_string())
}

/// The path the original transcript is renamed to.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Replaces the transcript at `path` with its IPA conversion.
///
/// The original is renamed to `path` + `backup_suffix` (replacing any earlier
/// backup) and the converted records are written to a new file at `path`.
pub fn rewrite_text_file(path: &Path, config: &RewriteConfig) -> Result<RewriteSummary, PinyinError> {
    if config.dry_run {
        let stdout = io::stdout();
        let records = convert_file_to(path, stdout.lock())?;
        return Ok(RewriteSummary {
            path: path.to_path_buf(),
            records,
            backup: None,
        });
    }

    let backup = backup_path(path, &config.backup_suffix);
    fs::rename(path, &backup).map_err(|e| PinyinError::io(path, e))?;

    let original = File::open(&backup).map_err(|e| PinyinError::io(&backup, e))?;
    let converted = File::create(path).map_err(|e| PinyinError::io(path, e))?;
    let records = convert_records(
        BufReader::new(original),
        BufWriter::new(converted),
        &backup.display().to_string(),
    )?;

    Ok(RewriteSummary {
        path: path.to_path_buf(),
        records,
        backup: Some(backup),
    })
}
