// tests/corpus_tests.rs

mod common;

use std::fs;
use std::io::Cursor;

use common::temp_path;
use pinyin_ipa::corpus::{
    backup_path, convert_file_to, convert_record, convert_records, rewrite_text_file,
    RewriteConfig,
};
use pinyin_ipa::PinyinError;

const TRANSCRIPT: &str = "utt001 ni3 hao3\nutt002\tzhong1 guo2\nutt003 huar1 er4\n";
const CONVERTED: &str = "utt001 n i x aʊ\nutt002 tʃ ʊ ŋ k w ɔ\nutt003 x w a ɹ ʔ ɚ\n";

#[test]
fn test_convert_record() {
    assert_eq!(
        convert_record("utt001 ni3 hao3", 1, "text").unwrap(),
        "utt001 n i x aʊ"
    );
}

#[test]
fn test_record_whitespace_is_normalized() {
    assert_eq!(
        convert_record("  utt9 \t bo1   ju2  \r\n", 1, "text").unwrap(),
        "utt9 p w ɔ tɕ y"
    );
}

#[test]
fn test_empty_record_is_malformed() {
    let err = convert_record("   ", 3, "text").unwrap_err();
    assert!(matches!(err, PinyinError::MalformedRecord { line: 3, .. }));
}

#[test]
fn test_record_without_transcription_is_malformed() {
    let err = convert_record("utt001", 7, "text").unwrap_err();
    match err {
        PinyinError::MalformedRecord { line, reason, .. } => {
            assert_eq!(line, 7);
            assert!(reason.contains("utt001"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_bad_token_points_into_line() {
    let err = convert_record("utt001 ni3 hao", 2, "text").unwrap_err();
    match err {
        PinyinError::UnrecognizedSyllable { token, span, src, .. } => {
            assert_eq!(token, "hao");
            assert_eq!(span.offset(), 11);
            assert_eq!(src.name(), "text:2");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_convert_records_preserves_order() {
    let mut out = Vec::new();
    let count = convert_records(Cursor::new(TRANSCRIPT), &mut out, "text").unwrap();
    assert_eq!(count, 3);
    assert_eq!(String::from_utf8(out).unwrap(), CONVERTED);
}

#[test]
fn test_convert_records_stops_on_error_with_aligned_output() {
    let input = "utt001 ni3 hao3\nutt002 xyz9\nutt003 bo1\n";
    let mut out = Vec::new();
    let err = convert_records(Cursor::new(input), &mut out, "text").unwrap_err();
    assert!(err.is_unrecognized());
    assert_eq!(String::from_utf8(out).unwrap(), "utt001 n i x aʊ\n");
}

#[test]
fn test_backup_path_appends_suffix() {
    let path = std::path::Path::new("data/test_phn/text");
    assert_eq!(
        backup_path(path, ".old"),
        std::path::PathBuf::from("data/test_phn/text.old")
    );
}

#[test]
fn test_rewrite_text_file_keeps_backup() {
    let path = temp_path("rewrite_text");
    fs::write(&path, TRANSCRIPT).unwrap();

    let summary = rewrite_text_file(&path, &RewriteConfig::default()).unwrap();

    assert_eq!(summary.records, 3);
    let backup = summary.backup.unwrap();
    assert_eq!(backup, backup_path(&path, ".old"));
    assert_eq!(fs::read_to_string(&backup).unwrap(), TRANSCRIPT);
    assert_eq!(fs::read_to_string(&path).unwrap(), CONVERTED);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&backup);
}

#[test]
fn test_rewrite_with_custom_suffix() {
    let path = temp_path("rewrite_suffix");
    fs::write(&path, "a1 bo1\n").unwrap();
    let config = RewriteConfig {
        backup_suffix: ".pinyin".to_string(),
        ..RewriteConfig::default()
    };

    let summary = rewrite_text_file(&path, &config).unwrap();

    let backup = backup_path(&path, ".pinyin");
    assert_eq!(summary.backup.as_ref(), Some(&backup));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a1 p w ɔ\n");

    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&backup);
}

#[test]
fn test_rewrite_missing_file_is_io_error() {
    let path = temp_path("does_not_exist");
    let err = rewrite_text_file(&path, &RewriteConfig::default()).unwrap_err();
    assert!(matches!(err, PinyinError::Io { .. }));
}

#[test]
fn test_convert_file_to_leaves_file_untouched() {
    let path = temp_path("convert_to");
    fs::write(&path, TRANSCRIPT).unwrap();

    let mut out = Vec::new();
    let count = convert_file_to(&path, &mut out).unwrap();

    assert_eq!(count, 3);
    assert_eq!(String::from_utf8(out).unwrap(), CONVERTED);
    assert_eq!(fs::read_to_string(&path).unwrap(), TRANSCRIPT);
    let _ = fs::remove_file(&path);
}
