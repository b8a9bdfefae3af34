use image::RgbImage;

use crate::palette::Color;

/// Vertical linear gradient from `start` to `end`.
///
/// Each row is a single solid color blended at `ratio = y / height`. The
/// ratio never reaches 1.0, so the last row stops just short of `end`.
pub fn render(width: u32, height: u32, start: Color, end: Color) -> RgbImage {
    let mut img = RgbImage::new(width, height);

    for y in 0..height {
        let ratio = y as f32 / height as f32;
        let row = start.blend(end, ratio).to_rgb();
        for x in 0..width {
            img.put_pixel(x, y, row);
        }
    }

    img
}
