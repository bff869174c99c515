// file: src/exporter/mod.rs
// description: run export module exports

pub mod json;

pub use json::{JsonExporter, KeywordReport};
