//! Handles all user-facing output for the CLI.
//!
//! Colored headers go through `termcolor`; table columns are padded by display
//! width so IPA symbols line up.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::corpus::RewriteSummary;
use crate::syntax::ParsedSyllable;

/// Everything `inspect` shows about one syllable.
#[derive(Debug, serde::Serialize)]
pub struct Inspection<'a> {
    pub input: &'a str,
    pub regularized: String,
    pub syllable: ParsedSyllable,
    pub ipa: String,
}

fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn print_heading(stdout: &mut StandardStream, text: &str) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    let _ = writeln!(stdout, "{}", text);
    let _ = stdout.reset();
}

/// Pads `text` with spaces to `width` terminal columns.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Prints a two-column spelling/IPA table under a heading.
pub fn print_table(title: &str, rows: &[(&str, &str)]) {
    let mut stdout = StandardStream::stdout(color_choice());
    print_heading(&mut stdout, &format!("{} ({})", title, rows.len()));
    let width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    for (key, ipa) in rows {
        let _ = writeln!(stdout, "  {}  {}", pad(key, width), ipa);
    }
}

/// Prints the stages of one conversion.
pub fn print_inspection(inspection: &Inspection) {
    let mut stdout = StandardStream::stdout(color_choice());
    print_heading(&mut stdout, inspection.input);
    let syllable = &inspection.syllable;
    let retroflex = if syllable.retroflex { "yes" } else { "no" };
    let rows = [
        ("regularized", inspection.regularized.as_str()),
        ("initial", syllable.initial.as_str()),
        ("rime", syllable.rime.as_str()),
        ("retroflex", retroflex),
    ];
    for (label, value) in rows {
        let _ = writeln!(stdout, "  {}  {}", pad(label, 11), value);
    }
    let _ = writeln!(stdout, "  {}  {}", pad("tone", 11), syllable.tone);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = writeln!(stdout, "  {}  {}", pad("ipa", 11), inspection.ipa);
    let _ = stdout.reset();
}

/// Prints the outcome of a transcript rewrite.
pub fn print_summary(summary: &RewriteSummary) {
    match &summary.backup {
        Some(backup) => eprintln!(
            "Converted {} records in {} (original kept as {})",
            summary.records,
            summary.path.display(),
            backup.display()
        ),
        None => eprintln!(
            "Converted {} records from {} (dry run, file untouched)",
            summary.records,
            summary.path.display()
        ),
    }
}
