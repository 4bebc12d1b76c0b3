//! Static asset collaborators: the image directory the picker
//! enumerates and the music directory backing the soundtrack.
//!
//! The picker gallery is deliberately flat: every image found, no
//! filtering, no pagination. Slide data stores sources as `/img/<file>`
//! paths; [`AssetLibrary::resolve`] maps those back to real files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "svg"];
const MUSIC_EXTENSIONS: [&str; 4] = ["mp3", "ogg", "flac", "wav"];

/// The track autoplay prefers when it is present.
const PREFERRED_TRACK: &str = "dMaura.mp3";

#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    image_root: PathBuf,
    /// Slide-source form (`/img/<file>`), sorted, one per image found.
    images: Vec<String>,
    /// Filename → full path for every playable track found.
    music: BTreeMap<String, PathBuf>,
}

impl AssetLibrary {
    /// Scan the image and music directories once at startup. Missing
    /// directories just yield empty galleries; the show still runs.
    pub fn scan(image_dir: &Path, music_dir: &Path) -> Self {
        let images = list_files(image_dir, &IMAGE_EXTENSIONS)
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                Some(format!("/img/{name}"))
            })
            .collect::<Vec<_>>();

        let music = list_files(music_dir, &MUSIC_EXTENSIONS)
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                Some((name, path))
            })
            .collect::<BTreeMap<_, _>>();

        info!(
            images = images.len(),
            tracks = music.len(),
            "asset scan complete"
        );

        Self {
            image_root: image_dir.to_path_buf(),
            images,
            music,
        }
    }

    /// Every image source, in stable order. This is the picker gallery.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Map a slide source (`/img/<file>`) to the actual file path.
    pub fn resolve(&self, src: &str) -> PathBuf {
        let name = src.rsplit('/').next().unwrap_or(src);
        self.image_root.join(name)
    }

    /// Default soundtrack: the preferred track when present, otherwise
    /// the first available one, otherwise silence.
    pub fn default_track(&self) -> Option<PathBuf> {
        self.music
            .get(PREFERRED_TRACK)
            .or_else(|| self.music.values().next())
            .cloned()
    }
}

fn list_files(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn scan_keeps_only_known_extensions() {
        let img = TempDir::new().unwrap();
        let music = TempDir::new().unwrap();
        touch(img.path(), "1.jpeg");
        touch(img.path(), "2.PNG");
        touch(img.path(), "notes.txt");
        touch(music.path(), "dMaura.mp3");
        touch(music.path(), "cover.pdf");

        let library = AssetLibrary::scan(img.path(), music.path());
        assert_eq!(library.images(), &["/img/1.jpeg", "/img/2.PNG"]);
        assert_eq!(library.default_track(), Some(music.path().join("dMaura.mp3")));
    }

    #[test]
    fn default_track_prefers_the_named_file_then_falls_back() {
        let img = TempDir::new().unwrap();
        let music = TempDir::new().unwrap();
        touch(music.path(), "a-first.mp3");
        touch(music.path(), "zz-last.mp3");

        let library = AssetLibrary::scan(img.path(), music.path());
        assert_eq!(
            library.default_track(),
            Some(music.path().join("a-first.mp3"))
        );

        touch(music.path(), "dMaura.mp3");
        let library = AssetLibrary::scan(img.path(), music.path());
        assert_eq!(library.default_track(), Some(music.path().join("dMaura.mp3")));
    }

    #[test]
    fn empty_directories_mean_no_audio_and_no_gallery() {
        let img = TempDir::new().unwrap();
        let music = TempDir::new().unwrap();
        let library = AssetLibrary::scan(img.path(), music.path());
        assert!(library.images().is_empty());
        assert!(library.default_track().is_none());
    }

    #[test]
    fn resolve_maps_slide_sources_back_to_files() {
        let img = TempDir::new().unwrap();
        let music = TempDir::new().unwrap();
        let library = AssetLibrary::scan(img.path(), music.path());
        assert_eq!(library.resolve("/img/30.jpg"), img.path().join("30.jpg"));
    }
}
