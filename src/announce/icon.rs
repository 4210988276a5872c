//! Notification icons

use std::path::{Path, PathBuf};

/// Supplies an icon file for a given pixel size
pub trait IconProvider: Send + Sync {
    /// Absolute path of an icon of `width`x`height`, if one is available
    fn icon(&self, width: u32, height: u32) -> Option<PathBuf>;
}

/// Never has an icon
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcon;

impl IconProvider for NoIcon {
    fn icon(&self, _width: u32, _height: u32) -> Option<PathBuf> {
        None
    }
}

/// Looks icons up in a directory.
///
/// Tried in order: `<dir>/<w>x<h>.png`, then `<dir>/<w>x<h>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirectoryIconProvider {
    dir: PathBuf,
    name: String,
}

impl DirectoryIconProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            name: "gradle".to_string(),
        }
    }

    /// Icon file name used inside size subdirectories
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl IconProvider for DirectoryIconProvider {
    fn icon(&self, width: u32, height: u32) -> Option<PathBuf> {
        let size = format!("{}x{}", width, height);
        let candidates = [
            self.dir.join(format!("{}.png", size)),
            self.dir.join(&size).join(format!("{}.png", self.name)),
        ];

        candidates
            .into_iter()
            .find(|p| p.is_file())
            .map(|p| std::path::absolute(&p).unwrap_or(p))
    }
}
