use common::{ImageInfo, Intensity, PixelBuffer};
use errors::*;
use image::{self, GrayImage, Luma};
use std::path::Path;

/// Decodes any supported image into 8-bit intensities.
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path)
        .chain_err(|| format!("Could not open image {}", path.display()))?
        .into_luma8();
    let info = ImageInfo::new(image.width() as usize, image.height() as usize);
    let pixels = image
        .into_raw()
        .into_iter()
        .map(Intensity::from)
        .collect();
    Ok(PixelBuffer::from_pixels(info, pixels))
}

/// Encodes `buffer` as an 8-bit grayscale image; the format follows the
/// file extension.
pub fn store(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let info = buffer.info();
    let image = GrayImage::from_fn(info.width as u32, info.height as u32, |x, y| {
        let value = buffer.get(x as usize, y as usize);
        Luma([value.max(0).min(255) as u8])
    });
    image
        .save(path)
        .chain_err(|| format!("Error saving image {}", path.display()))?;
    Ok(())
}
