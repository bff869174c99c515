// file: src/models/keyword.rs
// description: ranked keyword results and their list-of-tuples text form
// reference: internal data structures

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

impl From<jieba_rs::Keyword> for Keyword {
    fn from(keyword: jieba_rs::Keyword) -> Self {
        Self {
            term: keyword.keyword,
            weight: keyword.weight,
        }
    }
}

/// Keywords ordered by descending weight, at most `top_k` long.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordResult {
    keywords: Vec<Keyword>,
    with_weight: bool,
}

impl KeywordResult {
    /// Orders `keywords` by descending weight and keeps the first `top_k`.
    /// The sort is stable, so equal weights keep the ranker's order.
    pub fn ranked(mut keywords: Vec<Keyword>, top_k: usize, with_weight: bool) -> Self {
        keywords.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        keywords.truncate(top_k);
        Self {
            keywords,
            with_weight,
        }
    }

    pub fn empty(with_weight: bool) -> Self {
        Self {
            keywords: Vec::new(),
            with_weight,
        }
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.term.as_str())
    }

    pub fn with_weight(&self) -> bool {
        self.with_weight
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn first(&self) -> Option<&Keyword> {
        self.keywords.first()
    }
}

/// Renders `[('term', weight), ...]`, or `['term', ...]` without weights.
impl fmt::Display for KeywordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, keyword) in self.keywords.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            if self.with_weight {
                write!(
                    f,
                    "({}, {})",
                    python_str_repr(&keyword.term),
                    python_float_repr(keyword.weight)
                )?;
            } else {
                f.write_str(&python_str_repr(&keyword.term))?;
            }
        }
        f.write_str("]")
    }
}

impl Serialize for KeywordResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.with_weight {
            self.keywords.serialize(serializer)
        } else {
            serializer.collect_seq(self.terms())
        }
    }
}

pub fn python_str_repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_python_printable(c) => {
                let code = c as u32;
                if code < 0x100 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Python escapes controls, format characters, private use code points and
/// every separator except the ASCII space.
fn is_python_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() {
        return false;
    }
    !matches!(
        c as u32,
        // separators (Zs, Zl, Zp)
        0x00A0 | 0x1680 | 0x2000..=0x200A | 0x2028 | 0x2029 | 0x202F | 0x205F | 0x3000
        // format characters (Cf)
        | 0x00AD | 0x0600..=0x0605 | 0x061C | 0x06DD | 0x070F | 0x0890..=0x0891 | 0x08E2
        | 0x180E | 0x200B..=0x200F | 0x202A..=0x202E | 0x2060..=0x2064 | 0x2066..=0x206F
        | 0xFEFF | 0xFFF9..=0xFFFB | 0x110BD | 0x110CD | 0x13430..=0x1343F
        | 0x1BCA0..=0x1BCA3 | 0x1D173..=0x1D17A | 0xE0001 | 0xE0020..=0xE007F
        // private use (Co) and the BMP noncharacters
        | 0xE000..=0xF8FF | 0xFDD0..=0xFDEF | 0xFFFE | 0xFFFF
        | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD
    )
}

/// Shortest round-trip float text with Python's exponent spelling.
pub fn python_float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            let mantissa = mantissa.strip_suffix(".0").unwrap_or(mantissa);
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
