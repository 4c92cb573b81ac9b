//! File-based storage for native platforms.

use super::{DocumentStorage, PersistedDocument, StorageError, StorageResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name used in the default location.
pub const DEFAULT_FILE_NAME: &str = "colors.json";

/// Stores the palette document as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage in the default location.
    ///
    /// On Unix: `~/.local/share/colorcoder/colors.json`
    /// On Windows: `%LOCALAPPDATA%\colorcoder\colors.json`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Ok(Self::new(base.join("colorcoder").join(DEFAULT_FILE_NAME)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl DocumentStorage for FileStorage {
    fn load(&self) -> StorageResult<PersistedDocument> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let document = PersistedDocument::from_json(&json).map_err(|e| match e {
            StorageError::Format(msg) => {
                StorageError::Format(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;
        log::info!(
            "Loaded {} colors from {}",
            document.palette.len(),
            self.path.display()
        );
        Ok(document)
    }

    fn save(&self, document: &PersistedDocument) -> StorageResult<()> {
        let json = document.to_json()?;
        let dir = self.parent_dir();
        fs::create_dir_all(&dir).map_err(|e| {
            StorageError::Io(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        // Write next to the target and rename over it, so a failed write
        // never truncates the previous file.
        let write_err =
            |e: std::io::Error| StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e));
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        log::info!(
            "Saved {} colors to {}",
            document.palette.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::{ColorEntry, Palette};
    use tempfile::tempdir;

    fn sample_palette() -> Palette {
        Palette::from_entries([
            ColorEntry::uniform("red", Rgb::new(1.0, 0.0, 0.0)),
            ColorEntry::new("moss", Rgb::new(0.2, 0.4, 0.1), Rgb::new(0.3, 0.6, 0.15)),
            ColorEntry::uniform("sky", Rgb::new(0.4706, 0.7843, 1.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("colors.json"));

        let document = PersistedDocument::new(sample_palette());
        storage.save(&document).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded.palette.entries(), document.palette.entries());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("colors.json"));

        storage.save(&PersistedDocument::new(sample_palette())).unwrap();
        storage.save(&PersistedDocument::default()).unwrap();

        assert!(storage.load().unwrap().palette.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("colors.json"));
        storage.save(&PersistedDocument::default()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("missing.json"));
        assert!(matches!(storage.load(), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_garbage_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("colors.json");
        fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(&path);
        assert!(matches!(storage.load(), Err(StorageError::Format(_))));
    }

    #[test]
    fn test_save_onto_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("colors.json");
        fs::create_dir(&target).unwrap();

        let storage = FileStorage::new(&target);
        assert!(matches!(
            storage.save(&PersistedDocument::new(sample_palette())),
            Err(StorageError::Io(_))
        ));
        // the temp file is cleaned up on failure
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_save_keeps_previous_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let folder = dir.path().join("palettes");
        let storage = FileStorage::new(folder.join("colors.json"));
        let first = PersistedDocument::new(sample_palette());
        storage.save(&first).unwrap();

        fs::set_permissions(&folder, fs::Permissions::from_mode(0o555)).unwrap();
        // Permission bits do not stop root; nothing can fail the save then.
        let locked = fs::write(folder.join("check"), "").is_err();
        let second = storage.save(&PersistedDocument::default());
        fs::set_permissions(&folder, fs::Permissions::from_mode(0o755)).unwrap();

        if locked {
            assert!(matches!(second, Err(StorageError::Io(_))));
            assert_eq!(fs::read_dir(&folder).unwrap().count(), 1);
            assert_eq!(storage.load().unwrap().palette.entries(), first.palette.entries());
        } else {
            assert!(second.is_ok());
            assert!(storage.load().unwrap().palette.is_empty());
        }
    }
}
