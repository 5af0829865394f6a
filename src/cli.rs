//! The pinyin-ipa Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::Parser;

use crate::{
    corpus::{self, RewriteConfig},
    errors::print_error,
    syntax::{self, INITIALS, RIMES},
    test_harness::{run_all_tests, TestConfig},
    PinyinError,
};

pub mod args;
pub mod output;

use args::{Command, PinyinArgs};
use output::Inspection;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = PinyinArgs::parse();

    let result = match args.command {
        Command::Convert { tokens } => handle_convert(&tokens),
        Command::Inspect { token, json } => handle_inspect(&token, json),
        Command::Rewrite {
            file,
            backup_suffix,
            dry_run,
        } => {
            let config = RewriteConfig {
                backup_suffix,
                dry_run,
            };
            corpus::rewrite_text_file(&file, &config).map(|summary| output::print_summary(&summary))
        }
        Command::Tables => {
            output::print_table("Initials", INITIALS);
            println!();
            output::print_table("Rimes", RIMES);
            Ok(())
        }
        Command::Test { path, filter } => {
            let config = TestConfig {
                test_root: path.display().to_string(),
                ..TestConfig::default()
            };
            let (_, failed, _) = run_all_tests(filter.as_deref(), &config);
            if failed > 0 {
                process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

fn handle_convert(tokens: &[String]) -> Result<(), PinyinError> {
    let ipa = crate::convert_sequence(&tokens.join(" "))?;
    println!("{}", ipa);
    Ok(())
}

fn handle_inspect(token: &str, json: bool) -> Result<(), PinyinError> {
    let regularized = syntax::regularize(token);
    let syllable = syntax::parser::parse_in(
        &regularized,
        token,
        &crate::SourceContext::from_token(token),
        0,
    )?;
    let inspection = Inspection {
        input: token,
        regularized,
        syllable,
        ipa: crate::render(&syllable),
    };

    if json {
        match serde_json::to_string_pretty(&inspection) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize inspection: {}", e);
                process::exit(1);
            }
        }
    } else {
        output::print_inspection(&inspection);
    }
    Ok(())
}
