// file: src/models/document.rs
// description: immutable text document loaded from disk
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Full text of an input file. Nothing mutates it after loading.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    path: PathBuf,
    #[serde(skip)]
    content: String,
    content_hash: String,
    byte_size: u64,
    loaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let content_hash = Self::compute_hash(&content);
        let byte_size = content.len() as u64;

        Self {
            path: path.into(),
            content,
            content_hash,
            byte_size,
            loaded_at: Utc::now(),
        }
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// True when there is nothing but whitespace to segment.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
