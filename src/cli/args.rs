//! Defines the command-line arguments and subcommands for the pinyin-ipa CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "pinyin-ipa",
    version,
    about = "Convert tone-numbered pinyin into IPA for speech corpus preparation."
)]
pub struct PinyinArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert pinyin syllables and print their IPA on one line.
    Convert {
        /// Syllables such as `zhong1 guo2`.
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Show how a single syllable is regularized, decomposed and rendered.
    Inspect {
        /// The syllable to inspect.
        token: String,
        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Convert a corpus transcript file in place, keeping the original as a backup.
    Rewrite {
        /// Transcript with `<utterance_id> <pinyin>...` records.
        #[arg(default_value = "../data/test_phn/text")]
        file: PathBuf,
        /// Suffix appended to the original file name.
        #[arg(long, default_value = ".old")]
        backup_suffix: String,
        /// Print the converted records instead of rewriting the file.
        #[arg(long)]
        dry_run: bool,
    },
    /// List the initial and rime tables.
    Tables,
    /// Run YAML conversion suites.
    Test {
        /// The directory containing YAML suites.
        #[arg(default_value = "tests/suites")]
        path: PathBuf,
        /// Only run cases whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },
}
