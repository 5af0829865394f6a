//! YAML conversion-suite harness.
//!
//! Discovers YAML suites, converts each case's input and compares the result
//! against the expected IPA or the expected error.
//!
//! # Test Format
//!
//! ```yaml
//! - name: "labial o"
//!   input: "bo1"
//!   expected: "p w ɔ"                 # for success tests
//! - name: "garbage"
//!   input: "xyz9"
//!   expect_error: "unrecognized"       # error message substring
//!   expect_error_code: "pinyin_ipa::syntax::unrecognized"
//!   skip: false                        # optional, defaults to false
//!   only: false                        # optional, defaults to false
//! ```
//!
//! `input` may hold several syllables separated by spaces; their IPA groups
//! are joined with single spaces, as in a converted transcript.
//!
//! ```rust,no_run
//! use pinyin_ipa::test_harness::{run_all_tests, TestConfig};
//!
//! let config = TestConfig::default();
//! let (passed, failed, skipped) = run_all_tests(None, &config);
//! if failed > 0 {
//!     std::process::exit(1);
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use difference::{Changeset, Difference};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::errors::PinyinError;

// =============================================================================
// CORE TYPES
// =============================================================================

/// Represents the result of executing a single test case.
#[derive(Debug, Clone)]
pub enum TestResult {
    Pass {
        file: String,
        name: String,
    },
    Fail {
        file: String,
        name: String,
        error: String,
        /// Expected and actual IPA when the conversion succeeded with the wrong output.
        mismatch: Option<(String, String)>,
    },
    Skipped {
        file: String,
        name: String,
        reason: String,
    },
}

/// A single YAML test case.
#[derive(Debug, Deserialize, Clone)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expected: Option<String>,
    pub expect_error: Option<String>,
    pub expect_error_code: Option<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub only: bool,
}

/// Configuration for test execution and reporting.
pub struct TestConfig {
    pub test_root: String,
    pub use_colors: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            test_root: "tests/suites".to_string(),
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

impl TestConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// TEST DISCOVERY AND LOADING
// =============================================================================

/// Discovers all YAML files recursively under the given root directory,
/// sorted for a stable run order.
pub fn discover_yaml_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Load and parse test cases from a YAML file.
pub fn load_test_cases(path: &Path) -> Vec<TestCase> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_yaml::from_str::<Vec<TestCase>>(&content) {
            Ok(cases) => cases,
            Err(e) => {
                eprintln!("Failed to parse YAML in {}: {}", path.display(), e);
                Vec::new()
            }
        },
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Helper for test skipping logic.
pub fn skip_reason(case: &TestCase, has_only: bool, filter: Option<&str>) -> Option<String> {
    if has_only && !case.only {
        return Some("Not marked 'only' in 'only' mode".to_string());
    }
    if case.skip {
        return Some("Marked 'skip'".to_string());
    }
    if let Some(f) = filter {
        if !case.name.to_lowercase().contains(&f.to_lowercase()) {
            return Some(format!("Filtered out by substring: {}", f));
        }
    }
    None
}

// =============================================================================
// TEST EXECUTION
// =============================================================================

fn expects_error(case: &TestCase) -> bool {
    case.expect_error.is_some() || case.expect_error_code.is_some()
}

fn error_matches(error: &PinyinError, case: &TestCase) -> bool {
    let message_ok = case
        .expect_error
        .as_deref()
        .map_or(true, |expected| error.to_string().contains(expected));
    let code_ok = case
        .expect_error_code
        .as_deref()
        .map_or(true, |expected| error.error_code().as_deref() == Some(expected));
    message_ok && code_ok
}

/// Converts a single case's input and judges the outcome.
pub fn run_test_case(file: String, case: TestCase) -> TestResult {
    let fail = |error: String, mismatch: Option<(String, String)>| TestResult::Fail {
        file: file.clone(),
        name: case.name.clone(),
        error,
        mismatch,
    };

    match (crate::convert_sequence(&case.input), expects_error(&case)) {
        (Ok(actual), false) => match case.expected.as_deref() {
            Some(expected) if expected.trim() == actual => TestResult::Pass {
                file: file.clone(),
                name: case.name.clone(),
            },
            Some(expected) => fail(
                "Output did not match expected".to_string(),
                Some((expected.trim().to_string(), actual)),
            ),
            None => fail("Test case has no expectation".to_string(), None),
        },
        (Ok(actual), true) => fail(
            format!("Expected an error but conversion produced '{}'", actual),
            None,
        ),
        (Err(error), true) if error_matches(&error, &case) => TestResult::Pass {
            file: file.clone(),
            name: case.name.clone(),
        },
        (Err(error), _) => fail(error.to_string(), None),
    }
}

// =============================================================================
// REPORTING AND OUTPUT
// =============================================================================

/// Partition test results by outcome type.
pub fn partition_results(results: &[TestResult]) -> (usize, usize, usize) {
    let passed = results
        .iter()
        .filter(|r| matches!(r, TestResult::Pass { .. }))
        .count();
    let failed = results
        .iter()
        .filter(|r| matches!(r, TestResult::Fail { .. }))
        .count();
    let skipped = results
        .iter()
        .filter(|r| matches!(r, TestResult::Skipped { .. }))
        .count();
    (passed, failed, skipped)
}

/// Print test results with colored output.
pub fn report_results(results: &[TestResult], config: &TestConfig) {
    for r in results {
        match r {
            TestResult::Pass { file, name } => {
                println!("{}: {} [{}]", config.colorize("PASS", GREEN), name, file)
            }
            TestResult::Fail { .. } => print_failure(r, config),
            TestResult::Skipped { file, name, reason } => {
                println!(
                    "{}: {} [{}] ({})",
                    config.colorize("SKIP", YELLOW),
                    name,
                    file,
                    reason
                )
            }
        }
    }

    let (passed, failed, skipped) = partition_results(results);
    println!(
        "\nTest summary: total {}, {} {}, {} {}, {} {}",
        results.len(),
        config.colorize("passed", GREEN),
        passed,
        config.colorize("failed", RED),
        failed,
        config.colorize("skipped", YELLOW),
        skipped,
    );

    if failed > 0 {
        eprintln!("\nFailed tests:");
        for r in results {
            if let TestResult::Fail { name, .. } = r {
                eprintln!("  - {}", name);
            }
        }
    }
}

/// Print detailed failure information.
pub fn print_failure(r: &TestResult, config: &TestConfig) {
    if let TestResult::Fail {
        file,
        name,
        error,
        mismatch,
    } = r
    {
        eprintln!("{}: {} [{}]", config.colorize("FAIL", RED), name, file);
        eprintln!("  Error: {}", error);
        if let Some((expected, actual)) = mismatch {
            eprintln!("  Expected: {}", expected);
            eprintln!("  Actual:   {}", actual);
            eprintln!("  Diff:     {}", symbol_diff(expected, actual, config));
        }
    }
}

/// Diffs two IPA strings symbol by symbol: removed symbols in `[-x]`, added in `{+x}`.
pub fn symbol_diff(expected: &str, actual: &str, config: &TestConfig) -> String {
    let changeset = Changeset::new(expected, actual, " ");
    changeset
        .diffs
        .iter()
        .map(|diff| match diff {
            Difference::Same(x) => x.clone(),
            Difference::Rem(x) => config.colorize(&format!("[-{}]", x), RED),
            Difference::Add(x) => config.colorize(&format!("{{+{}}}", x), GREEN),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Run all tests with optional filtering and return summary counts.
pub fn run_all_tests(filter: Option<&str>, config: &TestConfig) -> (usize, usize, usize) {
    let results = collect_results(filter, config);
    report_results(&results, config);
    partition_results(&results)
}

/// Runs every discovered case without printing anything.
pub fn collect_results(filter: Option<&str>, config: &TestConfig) -> Vec<TestResult> {
    let mut all_cases = Vec::new();
    for file_path in discover_yaml_files(&config.test_root) {
        let file_name = file_path.display().to_string();
        for case in load_test_cases(&file_path) {
            all_cases.push((file_name.clone(), case));
        }
    }
    let has_only_tests = all_cases.iter().any(|(_, case)| case.only);

    all_cases
        .into_iter()
        .map(|(file, case)| match skip_reason(&case, has_only_tests, filter) {
            Some(reason) => TestResult::Skipped {
                file,
                name: case.name,
                reason,
            },
            None => run_test_case(file, case),
        })
        .collect()
}

/// Test results summary.
pub struct TestResults {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Run tests with command line arguments: an optional name filter.
pub fn run_tests_with_args(args: &[String]) -> TestResults {
    let filter = args.first().map(|f| f.to_lowercase());
    let config = TestConfig::default();
    let (passed, failed, skipped) = run_all_tests(filter.as_deref(), &config);

    TestResults {
        passed,
        failed,
        skipped,
    }
}
