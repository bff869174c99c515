// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, TagError};
use crate::extractor::patterns::is_valid_pos_tag;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "KEYWORD_TAGS";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub frequency: RankingConfig,
    pub graph: GraphConfig,
    pub segmentation: SegmentationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub file_name: String,
    /// Directory `file_name` is resolved against. Defaults to the directory
    /// holding the executable.
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingConfig {
    pub top_k: usize,
    pub with_weight: bool,
    /// Empty means no part-of-speech restriction.
    pub allow_pos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GraphConfig {
    pub top_k: usize,
    pub with_weight: bool,
    pub allow_pos: Vec<String>,
    /// Co-occurrence window used when building the TextRank graph.
    pub span: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmentationConfig {
    pub user_dict: Option<PathBuf>,
    pub idf_dict: Option<PathBuf>,
    pub stop_words: Option<PathBuf>,
    /// Recognise words missing from the dictionary with the HMM model.
    pub use_hmm: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// List of (term, weight) tuples
    #[default]
    Python,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub report_graph: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            file_name: "essays.txt".to_string(),
            base_dir: None,
        }
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            user_dict: None,
            idf_dict: None,
            stop_words: None,
            use_hmm: true,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: 20,
            with_weight: true,
            allow_pos: vec![],
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            with_weight: true,
            allow_pos: ["ns", "n", "vn", "v"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            span: 5,
        }
    }
}

impl GraphConfig {
    pub fn ranking(&self) -> RankingConfig {
        RankingConfig {
            top_k: self.top_k,
            with_weight: self.with_weight,
            allow_pos: self.allow_pos.clone(),
        }
    }
}

impl Config {
    /// Layers an optional TOML file and `KEYWORD_TAGS__*` environment
    /// variables over the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("frequency.allow_pos")
                .with_list_parse_key("graph.allow_pos")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| TagError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| TagError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if self.input.file_name.trim().is_empty() {
            return Err(TagError::Config(
                "input.file_name must not be empty".to_string(),
            ));
        }

        if self.graph.span < 2 {
            return Err(TagError::Config(
                "graph.span must be at least 2".to_string(),
            ));
        }

        for tag in self
            .frequency
            .allow_pos
            .iter()
            .chain(self.graph.allow_pos.iter())
        {
            if !is_valid_pos_tag(tag) {
                return Err(TagError::Config(format!(
                    "invalid part-of-speech tag in allow_pos: {:?}",
                    tag
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_rankings() {
        let config = Config::default_config();
        assert_eq!(config.input.file_name, "essays.txt");
        assert_eq!(config.frequency.top_k, 20);
        assert!(config.frequency.with_weight);
        assert!(config.frequency.allow_pos.is_empty());
        assert_eq!(config.graph.top_k, 5);
        assert_eq!(config.graph.allow_pos, vec!["ns", "n", "vn", "v"]);
        assert_eq!(config.output.format, OutputFormat::Python);
        assert!(!config.output.report_graph);
        assert!(config.segmentation.use_hmm);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.graph.span, 5);
        assert!(config.segmentation.user_dict.is_none());
        assert!(config.segmentation.use_hmm);
    }

    #[test]
    fn test_toml_can_disable_hmm() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tags.toml");
        fs::write(&path, "[segmentation]\nuse_hmm = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.segmentation.use_hmm);
    }

    #[test]
    fn test_load_partial_toml_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tags.toml");
        fs::write(
            &path,
            r#"
[frequency]
top_k = 8

[graph]
allow_pos = ["n"]

[output]
format = "json"
report_graph = true
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.frequency.top_k, 8);
        assert!(config.frequency.with_weight);
        assert_eq!(config.graph.allow_pos, vec!["n"]);
        assert_eq!(config.graph.top_k, 5);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.report_graph);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/tags.toml")));
        assert!(matches!(result, Err(TagError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default_config();
        config.graph.span = 1;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.input.file_name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.frequency.allow_pos = vec!["Noun!".to_string()];
        assert!(config.validate().is_err());
    }
}
