// file: src/extractor/patterns.rs
// description: compiled regex patterns for ranking input validation
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // jieba part-of-speech tags: n, ns, vn, eng, ...
    pub static ref POS_TAG: Regex = Regex::new(r"^[a-z]{1,4}$").expect("POS_TAG regex is valid");

    // Stop word files allow `#` comment lines
    pub static ref COMMENT_LINE: Regex = Regex::new(r"^\s*#").expect("COMMENT_LINE regex is valid");
}

pub fn is_valid_pos_tag(tag: &str) -> bool {
    POS_TAG.is_match(tag)
}

pub fn is_comment_line(line: &str) -> bool {
    COMMENT_LINE.is_match(line)
}
