//! Application configuration.

use std::path::PathBuf;

use colorcoder_core::FileStorage;
use colorcoder_core::storage::StorageResult;

/// Environment variable naming the palette file.
pub const PALETTE_ENV: &str = "COLORCODER_PALETTE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Palette file; `None` means the default location.
    pub palette_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "ColorCoder".to_string(),
            width: 960.0,
            height: 640.0,
            palette_path: None,
        }
    }
}

impl AppConfig {
    /// Resolve the palette path: first argument, then the environment variable.
    pub fn from_sources(mut args: impl Iterator<Item = String>, env: Option<String>) -> Self {
        let palette_path = args
            .next()
            .or(env)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self {
            palette_path,
            ..Self::default()
        }
    }

    /// Configuration from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::from_sources(std::env::args().skip(1), std::env::var(PALETTE_ENV).ok())
    }

    /// Storage for the configured palette file.
    pub fn storage(&self) -> StorageResult<FileStorage> {
        match &self.palette_path {
            Some(path) => Ok(FileStorage::new(path)),
            None => FileStorage::default_location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_argument_wins() {
        let config = AppConfig::from_sources(args(&["a.json"]), Some("b.json".into()));
        assert_eq!(config.palette_path, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_env_fallback() {
        let config = AppConfig::from_sources(args(&[]), Some("b.json".into()));
        assert_eq!(config.palette_path, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_default_location() {
        let config = AppConfig::from_sources(args(&[]), Some("  ".into()));
        assert_eq!(config.palette_path, None);
        assert_eq!(config.title, "ColorCoder");
    }

    #[test]
    fn test_storage_uses_path() {
        let config = AppConfig {
            palette_path: Some(PathBuf::from("/tmp/x.json")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.storage().unwrap().path(),
            std::path::Path::new("/tmp/x.json")
        );
    }
}
