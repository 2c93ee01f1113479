use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("hand size must be greater than 0 (got {0})")]
    InvalidHandSize(i64),

    #[error("hand size {hand} exceeds deck size {deck}")]
    HandSizeExceedsDeck { hand: i64, deck: usize },

    #[error("deck file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeckError {
    pub(crate) fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DeckError::FileNotFound { path: path.to_path_buf() }
        } else {
            DeckError::Io { path: path.to_path_buf(), source }
        }
    }
}
