// file: src/extractor/ranker.rs
// description: jieba-backed TF-IDF and TextRank keyword rankers
// reference: https://docs.rs/jieba-rs

use crate::config::SegmentationConfig;
use crate::error::{Result, TagError};
use crate::extractor::patterns::is_comment_line;
use crate::models::Keyword;
use jieba_rs::{Jieba, KeywordExtract, KeywordExtractConfig, TextRank, TfIdf};
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankerKind {
    /// TF-IDF over segmented terms
    Frequency,
    /// TextRank over the term co-occurrence graph
    Graph,
}

impl fmt::Display for RankerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankerKind::Frequency => f.write_str("tf-idf"),
            RankerKind::Graph => f.write_str("textrank"),
        }
    }
}

/// Ranks the terms of a text. An empty `allow_pos` means every part of
/// speech qualifies.
pub trait KeywordRanker {
    fn kind(&self) -> RankerKind;

    fn rank(&self, text: &str, top_k: usize, allow_pos: &[String]) -> Result<Vec<Keyword>>;
}

pub struct JiebaRanker<E> {
    jieba: Arc<Jieba>,
    extractor: E,
    kind: RankerKind,
}

impl JiebaRanker<TfIdf> {
    pub fn frequency(jieba: Arc<Jieba>, segmentation: &SegmentationConfig) -> Result<Self> {
        let mut extractor = TfIdf::default();

        if let Some(path) = &segmentation.idf_dict {
            info!("Loading IDF dictionary from {}", path.display());
            let table = read_idf_table(path)?;
            extractor
                .load_dict(&mut table.as_bytes())
                .map_err(|e| {
                    TagError::Extraction(format!(
                        "Invalid IDF dictionary {}: {}",
                        path.display(),
                        e
                    ))
                })?;
        }

        *extractor.config_mut() = extract_config(segmentation)?;

        Ok(Self {
            jieba,
            extractor,
            kind: RankerKind::Frequency,
        })
    }
}

impl JiebaRanker<TextRank> {
    pub fn graph(
        jieba: Arc<Jieba>,
        segmentation: &SegmentationConfig,
        span: usize,
    ) -> Result<Self> {
        let extractor = TextRank::new(span, extract_config(segmentation)?);

        Ok(Self {
            jieba,
            extractor,
            kind: RankerKind::Graph,
        })
    }
}

impl<E: KeywordExtract> KeywordRanker for JiebaRanker<E> {
    fn kind(&self) -> RankerKind {
        self.kind
    }

    fn rank(&self, text: &str, top_k: usize, allow_pos: &[String]) -> Result<Vec<Keyword>> {
        let keywords =
            self.extractor
                .extract_keywords(&self.jieba, text, top_k, allow_pos.to_vec());

        debug!("{} ranked {} keywords", self.kind, keywords.len());

        Ok(keywords.into_iter().map(Keyword::from).collect())
    }
}

/// Builds the segmenter, layering the optional user dictionary over the
/// bundled one.
pub fn build_jieba(segmentation: &SegmentationConfig) -> Result<Jieba> {
    let mut jieba = Jieba::new();

    if let Some(path) = &segmentation.user_dict {
        info!("Loading user dictionary from {}", path.display());
        let file = open_dictionary(path)?;
        jieba.load_dict(&mut BufReader::new(file)).map_err(|e| {
            TagError::Extraction(format!(
                "Invalid user dictionary {}: {}",
                path.display(),
                e
            ))
        })?;
    }

    Ok(jieba)
}

fn extract_config(segmentation: &SegmentationConfig) -> Result<KeywordExtractConfig> {
    let mut builder = KeywordExtractConfig::builder();
    builder.use_hmm(segmentation.use_hmm);

    if let Some(path) = &segmentation.stop_words {
        for word in read_stop_words(path)? {
            builder.add_stop_word(word);
        }
    }

    builder
        .build()
        .map_err(|e| TagError::Extraction(format!("Invalid keyword settings: {}", e)))
}

pub fn read_stop_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TagError::Extraction(format!(
            "Cannot read stop words {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment_line(line))
        .map(str::to_lowercase)
        .collect())
}

/// Reads an IDF table of `word idf` lines. Every non-blank line must carry a
/// finite numeric weight.
pub fn read_idf_table(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        TagError::Extraction(format!(
            "Cannot read IDF dictionary {}: {}",
            path.display(),
            e
        ))
    })?;

    for (idx, line) in content.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            continue;
        };

        let valid = parts
            .next()
            .and_then(|idf| idf.parse::<f64>().ok())
            .is_some_and(f64::is_finite);

        if !valid {
            return Err(TagError::Extraction(format!(
                "Invalid IDF dictionary {} line {}: no weight for {:?}",
                path.display(),
                idx + 1,
                word
            )));
        }
    }

    Ok(content)
}

fn open_dictionary(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        TagError::Extraction(format!(
            "Cannot open dictionary {}: {}",
            path.display(),
            e
        ))
    })
}
