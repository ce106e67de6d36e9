use std::io;
use thiserror::Error;

/// Top-level error for the binary: anything that ends the session.
///
/// Load failures never end up here; the app shows them on the command deck.
#[derive(Error, Debug)]
pub enum SpeedReadError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
