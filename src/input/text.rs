use super::{non_empty, LoadError, LoadedDocument};
use std::fs;
use std::path::Path;

const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

/// Load a UTF-8 text or Markdown file.
///
/// Files without an extension are read as text. Markdown syntax is left
/// in place; the chunker strips it.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let ext = ext.to_ascii_lowercase();
        if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(LoadError::UnsupportedFormat(ext));
        }
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("loaded {} bytes from {}", text.len(), path.display());
    non_empty(text, format!("file:{}", path.display()))
}
