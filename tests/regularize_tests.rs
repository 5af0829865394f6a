// tests/regularize_tests.rs

use pinyin_ipa::syntax::{regularize, NULL_INITIAL};

#[test]
fn test_labial_o_becomes_uo() {
    assert_eq!(regularize("bo1"), "buo1");
    assert_eq!(regularize("po2"), "puo2");
    assert_eq!(regularize("mo3"), "muo3");
    assert_eq!(regularize("fo2"), "fuo2");
}

#[test]
fn test_labial_ou_is_left_alone() {
    assert_eq!(regularize("mou2"), "mou2");
    assert_eq!(regularize("pou1"), "pou1");
}

#[test]
fn test_non_labial_o_is_left_alone() {
    assert_eq!(regularize("duo1"), "duo1");
    assert_eq!(regularize("lo5"), "lo5");
}

#[test]
fn test_u_after_palatals_becomes_v() {
    assert_eq!(regularize("ju2"), "jv2");
    assert_eq!(regularize("qu4"), "qv4");
    assert_eq!(regularize("xue2"), "xve2");
    assert_eq!(regularize("yun2"), "yvn2");
}

#[test]
fn test_u_after_other_initials_is_left_alone() {
    assert_eq!(regularize("lu4"), "lu4");
    assert_eq!(regularize("zhu1"), "zhu1");
}

#[test]
fn test_apical_i_after_sibilants() {
    assert_eq!(regularize("zhi1"), "zhɨ1");
    assert_eq!(regularize("chi1"), "chɨ1");
    assert_eq!(regularize("shi4"), "shɨ4");
    assert_eq!(regularize("ri4"), "rɨ4");
    assert_eq!(regularize("zi3"), "zɨ3");
    assert_eq!(regularize("ci2"), "cɨ2");
    assert_eq!(regularize("si1"), "sɨ1");
}

#[test]
fn test_i_after_other_initials_is_left_alone() {
    assert_eq!(regularize("ji1"), "ji1");
    assert_eq!(regularize("li3"), "li3");
}

#[test]
fn test_an_after_i_or_v_becomes_en() {
    assert_eq!(regularize("tian1"), "tien1");
    assert_eq!(regularize("juan4"), "jven4");
    assert_eq!(regularize("yuan2"), "yven2");
    assert_eq!(regularize("dianr3"), "dienr3");
}

#[test]
fn test_ang_after_i_is_left_alone() {
    assert_eq!(regularize("liang2"), "liang2");
    assert_eq!(regularize("jiang1"), "jiang1");
}

#[test]
fn test_an_after_other_vowels_is_left_alone() {
    assert_eq!(regularize("yan2"), "yan2");
    assert_eq!(regularize("guan1"), "guan1");
}

#[test]
fn test_null_initial_prefix() {
    assert_eq!(regularize("a1"), format!("{NULL_INITIAL}a1"));
    assert_eq!(regularize("ou3"), "ʔou3");
    assert_eq!(regularize("er4"), "ʔer4");
    assert_eq!(regularize("en1"), "ʔen1");
}

#[test]
fn test_bare_rime_gets_null_initial() {
    assert_eq!(regularize("ian2"), "ʔien2");
}

#[test]
fn test_bare_u_and_v_get_no_null_initial() {
    assert_eq!(regularize("u3"), "u3");
    assert_eq!(regularize("v3"), "v3");
    assert_eq!(regularize("ui4"), "ui4");
}

#[test]
fn test_rewrites_at_end_of_token() {
    assert_eq!(regularize("bo"), "buo");
    assert_eq!(regularize("jian"), "jien");
}

#[test]
fn test_consonant_initial_gets_no_prefix() {
    assert!(!regularize("ma1").starts_with(NULL_INITIAL));
    assert!(!regularize("yi1").starts_with(NULL_INITIAL));
    assert!(!regularize("wo3").starts_with(NULL_INITIAL));
}

#[test]
fn test_empty_token_stays_empty() {
    assert_eq!(regularize(""), "");
}

#[test]
fn test_garbage_passes_through() {
    assert_eq!(regularize("xyz9"), "xyz9");
}
