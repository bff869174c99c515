// file: src/loader.rs
// description: input path resolution and whole-file document loading
// reference: std::fs scoped reads

use crate::error::{Result, TagError};
use crate::models::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Joins `file_name` onto `base_dir`. No existence check happens here; a
/// missing file surfaces when it is loaded. An absolute `file_name` replaces
/// `base_dir` entirely.
pub fn resolve_path(base_dir: &Path, file_name: impl AsRef<Path>) -> PathBuf {
    base_dir.join(file_name)
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| TagError::file("<current executable>", e))?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

pub fn load_document(path: &Path) -> Result<Document> {
    let mut bytes = fs::read(path).map_err(|e| TagError::file(path, e))?;

    if bytes.starts_with(UTF8_BOM) {
        debug!("Stripping UTF-8 byte order mark from {}", path.display());
        bytes.drain(..UTF8_BOM.len());
    }

    let content = String::from_utf8(bytes).map_err(|source| TagError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} bytes from {}", content.len(), path.display());

    Ok(Document::new(path, content))
}
