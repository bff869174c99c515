// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod keyword;

pub use document::Document;
pub use keyword::{Keyword, KeywordResult};
