//! Durable storage for the slide deck.
//!
//! The whole deck is written as one JSON file under the platform data
//! directory, the desktop equivalent of the versioned localStorage key
//! the web version used. The version number is part of the filename;
//! bumping it abandons older decks on purpose. Absence of the current
//! file means the caller reseeds from the built-in default, and any
//! older file is left untouched and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::slides::Slide;

/// Bumped whenever the deck schema or the shipped default changes.
pub const STORE_VERSION: u32 = 24;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
    #[error("deck i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("deck serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle on the on-disk deck file.
#[derive(Debug, Clone)]
pub struct SlideStore {
    path: PathBuf,
}

impl SlideStore {
    /// Store rooted at the platform data directory:
    /// - Linux: ~/.local/share/maura-journey/slides-v24.json
    /// - macOS: ~/Library/Application Support/maura-journey/slides-v24.json
    /// - Windows: %APPDATA%\maura-journey\slides-v24.json
    pub fn open_default() -> Result<Self, StoreError> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(StoreError::NoDataDir)?;
        path.push("maura-journey");
        path.push(Self::file_name(STORE_VERSION));
        Ok(Self { path })
    }

    /// Store at an explicit directory, current version. Used by tests.
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(Self::file_name(STORE_VERSION)),
        }
    }

    fn file_name(version: u32) -> String {
        format!("slides-v{version}.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the deck saved under the current version, if any.
    ///
    /// A file that exists but does not parse is treated as absent: the
    /// presentation must come up either way, so the caller falls back
    /// to the default deck.
    pub fn load(&self) -> Option<Vec<Slide>> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(slides) => {
                info!(path = %self.path.display(), "loaded saved deck");
                Some(slides)
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "saved deck unreadable, reseeding");
                None
            }
        }
    }

    /// Write the whole deck. Called after every successful mutation.
    pub fn save(&self, slides: &[Slide]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(slides)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::defaults::default_slides;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_round_trips_the_deck() {
        let dir = TempDir::new().unwrap();
        let store = SlideStore::at_dir(dir.path());

        let deck = default_slides();
        store.save(&deck).unwrap();

        assert_eq!(store.load().unwrap(), deck);
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = TempDir::new().unwrap();
        let store = SlideStore::at_dir(dir.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_file_yields_none() {
        let dir = TempDir::new().unwrap();
        let store = SlideStore::at_dir(dir.path());
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(store.path(), "{ not a deck").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn older_version_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        let store = SlideStore::at_dir(dir.path());

        // A deck saved under a previous schema version sits next to
        // where the current file would go. It must not be picked up.
        let old = dir.path().join(SlideStore::file_name(STORE_VERSION - 1));
        fs::write(&old, serde_json::to_string(&default_slides()).unwrap()).unwrap();

        assert!(store.load().is_none());
        assert!(old.exists());
    }
}
