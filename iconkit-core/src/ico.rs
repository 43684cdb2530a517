//! Conversion of images to Windows `.ico` files.

use crate::{codec::ImageCodec, source::SourceImage, Error};
use std::path::{Path, PathBuf};

/// Writes a `.ico` next to each of `paths`, in order. Stops at the first
/// path that is missing or can't be converted; icons written for earlier
/// paths are kept.
pub fn generate<C: ImageCodec>(codec: &C, paths: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    if paths.is_empty() {
        return Err(Error::NoInput);
    }

    let mut written = Vec::with_capacity(paths.len());
    for path in paths {
        written.push(convert(codec, path)?);
    }
    Ok(written)
}

#[tracing::instrument(level = "debug", skip(codec))]
fn convert<C: ImageCodec>(codec: &C, path: &Path) -> Result<PathBuf, Error> {
    let source = SourceImage::new(path)?;
    let image = codec
        .open(source.path())
        .map_err(|e| Error::UnreadableImage(path.to_owned(), e))?;

    let dest = source.sibling_with_extension("ico");
    codec
        .write_ico(&image, &dest)
        .map_err(|e| Error::EncodeIcon(dest.clone(), e))?;
    tracing::info!("wrote {}", dest.display());
    Ok(dest)
}
