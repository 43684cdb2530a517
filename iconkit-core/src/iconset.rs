use crate::{source::SourceImage, Error};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Scale {
    Standard,
    Retina,
}

/// One image of an iconset: the pixel width it is rendered at and whether it
/// is the `@2x` variant of half that size.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct IconSize {
    pub width: u32,
    pub scale: Scale,
}

impl IconSize {
    const fn new(width: u32, scale: Scale) -> IconSize {
        IconSize { width, scale }
    }

    pub fn file_name(&self, extension: Option<&str>) -> String {
        let stem = match self.scale {
            Scale::Standard => format!("icon_{0}x{0}", self.width),
            Scale::Retina => format!("icon_{0}x{0}@2x", self.width / 2),
        };
        match extension {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem,
        }
    }
}

pub const ICON_SIZES: &[IconSize] = &[
    IconSize::new(16, Scale::Standard),
    IconSize::new(16, Scale::Retina),
    IconSize::new(32, Scale::Standard),
    IconSize::new(32, Scale::Retina),
    IconSize::new(64, Scale::Standard),
    IconSize::new(64, Scale::Retina),
    IconSize::new(128, Scale::Standard),
    IconSize::new(128, Scale::Retina),
    IconSize::new(256, Scale::Standard),
    IconSize::new(256, Scale::Retina),
    IconSize::new(512, Scale::Standard),
    IconSize::new(512, Scale::Retina),
    IconSize::new(1024, Scale::Standard),
    IconSize::new(1024, Scale::Retina),
];

/// Where the iconset and the packaged icon for a source image go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsetLayout {
    pub source: SourceImage,
    pub iconset_dir: PathBuf,
    pub icns: PathBuf,
}

impl IconsetLayout {
    pub fn for_source(source: SourceImage) -> IconsetLayout {
        let iconset_dir = source.sibling_with_extension("iconset");
        let icns = source.sibling_with_extension("icns");
        IconsetLayout {
            source,
            iconset_dir,
            icns,
        }
    }

    pub fn image_path(&self, size: &IconSize) -> PathBuf {
        self.iconset_dir
            .join(size.file_name(self.source.extension()))
    }

    /// Creates the iconset directory unless it is already there. Existing
    /// contents are left in place.
    pub fn ensure_iconset_dir(&self) -> Result<(), Error> {
        let dir = &self.iconset_dir;
        if dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "reusing existing iconset directory");
            return Ok(());
        }
        if dir.exists() {
            return Err(Error::NotADirectory(dir.clone()));
        }
        create_dir(dir).map_err(|e| Error::CreateIconset(dir.clone(), e))
    }
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new().mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir(dir)
}
