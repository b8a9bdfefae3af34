pub mod category;
pub mod gradient;
pub mod silhouette;
pub mod text;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;

/// JPEG quality for every generated asset
pub const JPEG_QUALITY: u8 = 95;

/// Encode `img` as a quality-95 JPEG, overwriting any existing file
pub fn save_jpeg(img: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|e| anyhow::anyhow!("Failed to encode {}: {}", path.display(), e))?;
    Ok(())
}
