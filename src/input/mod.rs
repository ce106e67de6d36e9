use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing to read in {0}")]
    EmptyDocument(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Raw text plus where it came from. Chunking happens in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

impl LoadedDocument {
    /// Wraps text typed straight into the command deck.
    pub fn inline(text: &str) -> Result<Self, LoadError> {
        non_empty(text.to_string(), "input".to_string())
    }
}

fn non_empty(text: String, source: String) -> Result<LoadedDocument, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument(source));
    }
    Ok(LoadedDocument { text, source })
}

pub mod clipboard;
pub mod text;
