// file: src/extractor/mod.rs
// description: keyword extraction module exports
// reference: internal module structure

pub mod keywords;
pub mod patterns;
pub mod ranker;

pub use keywords::KeywordExtractor;
pub use ranker::{JiebaRanker, KeywordRanker, RankerKind};
