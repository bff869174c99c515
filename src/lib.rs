// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod report;
pub mod utils;

pub use config::{
    Config, GraphConfig, InputConfig, OutputConfig, OutputFormat, RankingConfig,
    SegmentationConfig,
};
pub use error::{Result, TagError};
pub use exporter::{JsonExporter, KeywordReport};
pub use extractor::{JiebaRanker, KeywordExtractor, KeywordRanker, RankerKind};
pub use loader::{executable_dir, load_document, resolve_path};
pub use models::{Document, Keyword, KeywordResult};
pub use report::{render, report};
pub use utils::OperationTimer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let path = resolve_path(std::path::Path::new("."), &config.input.file_name);
        assert!(path.ends_with("essays.txt"));
    }
}
