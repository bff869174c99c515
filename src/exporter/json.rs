// file: src/exporter/json.rs
// description: json export of a keyword extraction run

use crate::error::{Result, TagError};
use crate::models::{Document, KeywordResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

/// Everything one run produced, keyed to the document it came from.
#[derive(Debug, Serialize)]
pub struct KeywordReport<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub generated_at: DateTime<Utc>,
    pub frequency: &'a KeywordResult,
    pub graph: &'a KeywordResult,
}

impl<'a> KeywordReport<'a> {
    pub fn new(document: &'a Document, frequency: &'a KeywordResult, graph: &'a KeywordResult) -> Self {
        Self {
            document,
            generated_at: Utc::now(),
            frequency,
            graph,
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| TagError::Export {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `keywords-<hash prefix>.json` and returns its path. Re-running on
    /// the same content overwrites the previous export.
    pub fn export(&self, report: &KeywordReport<'_>, pretty: bool) -> Result<PathBuf> {
        let hash = report.document.content_hash();
        let file_name = format!("keywords-{}.json", &hash[..hash.len().min(12)]);
        let path = self.output_dir.join(file_name);

        let json = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };

        fs::write(&path, json).map_err(|source| TagError::Export {
            path: path.clone(),
            source,
        })?;

        info!(
            "Exported {} frequency and {} graph keywords to {}",
            report.frequency.len(),
            report.graph.len(),
            path.display()
        );
        Ok(path)
    }
}
