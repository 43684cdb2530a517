use crate::Error;
use std::path::{Path, PathBuf};

/// An existing image file that icons are generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    path: PathBuf,
}

impl SourceImage {
    /// Checks that `path` names an existing regular file.
    pub fn new(path: impl Into<PathBuf>) -> Result<SourceImage, Error> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::MissingFile(path));
        }
        Ok(SourceImage { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file extension without the leading dot.
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// A sibling path with the same base name and the extension replaced.
    pub fn sibling_with_extension(&self, extension: &str) -> PathBuf {
        self.path.with_extension(extension)
    }
}
