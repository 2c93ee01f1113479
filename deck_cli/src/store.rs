use std::fs;
use std::path::Path;

use crate::codec;
use crate::deck::Deck;
use crate::error::DeckError;

/// Writes the encoded deck to `path`, creating missing parent directories.
pub fn save_deck<P: AsRef<Path>>(deck: &Deck, path: P) -> Result<(), DeckError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| DeckError::from_io(dir, e))?;
    }
    fs::write(path, codec::encode(deck)).map_err(|e| DeckError::from_io(path, e))
}

pub fn load_deck<P: AsRef<Path>>(path: P) -> Result<Deck, DeckError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| DeckError::from_io(path, e))?;
    Ok(codec::decode(&text))
}

#[cfg(test)]
pub(crate) fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("deck_cli_{}_{}", std::process::id(), name))
}
