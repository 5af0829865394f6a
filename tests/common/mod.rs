//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// Syllables (without tone) covering every initial and most rimes, including
/// the irregular spellings the regularizer rewrites.
pub const VALID_SYLLABLES: &[&str] = &[
    "a", "ai", "an", "ang", "ao", "e", "ei", "en", "eng", "er", "o", "ou",
    "ba", "bo", "bai", "ban", "bang", "bao", "bei", "ben", "beng", "bi", "bian", "biao", "bie",
    "bin", "bing", "bu", "pa", "po", "pou", "pian", "ma", "mo", "mou", "miu", "mie", "fo", "fei",
    "feng", "fu", "da", "de", "dong", "dui", "dun", "duo", "diu", "dian", "ta", "tian", "tuo",
    "na", "nv", "nve", "niang", "nuan", "la", "lv", "lve", "liang", "lun", "ge", "gong", "gua",
    "guai", "guan", "guang", "gui", "gun", "guo", "ka", "kou", "hu", "huo", "ji", "jia", "jian",
    "jiang", "jiao", "jie", "jin", "jing", "jiong", "jiu", "ju", "jue", "juan", "jun", "qi", "qu",
    "quan", "xi", "xu", "xue", "xuan", "xiong", "zhi", "zha", "zhe", "zhong", "zhuang", "chi",
    "chuan", "shi", "shui", "ri", "rong", "ren", "zi", "zui", "ci", "cuo", "si", "song", "yi",
    "ya", "yan", "yang", "yao", "ye", "yin", "ying", "yong", "you", "yu", "yue", "yuan", "yun",
    "wa", "wai", "wan", "wang", "wei", "wen", "weng", "wo", "wu",
];

/// Retroflexed syllables (tone still to be appended).
pub const RETROFLEX_SYLLABLES: &[&str] = &["huar", "wanr", "dianr", "shir", "menr", "der", "zher"];

/// A fresh path under the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pinyin-ipa-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}
