use super::{non_empty, LoadError, LoadedDocument};
use arboard::Clipboard;

/// Load text from the system clipboard.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    log::info!("loaded {} bytes from clipboard", text.len());
    non_empty(text, "clipboard".to_string())
}
