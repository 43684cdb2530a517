use eyre::WrapErr as _;
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    DynamicImage, ExtendedColorType,
};
use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

/// Reads source images and writes them as Windows icons.
pub trait ImageCodec {
    type Image;

    fn open(&self, path: &Path) -> eyre::Result<Self::Image>;

    fn write_ico(&self, image: &Self::Image, dest: &Path) -> eyre::Result<()>;
}

/// Frame sizes stored in an ICO file when the source is large enough.
pub const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

/// The standard frame sizes that fit within an image of the given dimensions.
/// Images too small for any of them get a single frame at their own size,
/// capped at the largest size an ICO entry can hold.
pub fn frame_sizes(width: u32, height: u32) -> Vec<u32> {
    let sizes = ICO_SIZES
        .iter()
        .copied()
        .filter(|&size| size <= width && size <= height)
        .collect::<Vec<_>>();
    if sizes.is_empty() {
        vec![width.max(height).min(256)]
    } else {
        sizes
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> eyre::Result<DynamicImage> {
        let image = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        Ok(image)
    }

    fn write_ico(&self, image: &DynamicImage, dest: &Path) -> eyre::Result<()> {
        let mut frames = Vec::new();
        for size in frame_sizes(image.width(), image.height()) {
            let frame = if size >= image.width() && size >= image.height() {
                image.to_rgba8()
            } else {
                image.thumbnail(size, size).to_rgba8()
            };
            let (width, height) = frame.dimensions();
            tracing::debug!(width, height, "encoding icon frame");
            frames.push(
                IcoFrame::as_png(frame.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .wrap_err_with(|| format!("failed to encode {}x{} frame", width, height))?,
            );
        }

        let mut writer = BufWriter::new(File::create(dest)?);
        IcoEncoder::new(&mut writer).encode_images(&frames)?;
        writer.flush()?;
        Ok(())
    }
}
