fn main() {
    pinyin_ipa::cli::run();
}
