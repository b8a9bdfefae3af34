use ab_glyph::{FontArc, PxScale};
use image::RgbImage;
use imageproc::drawing::draw_text_mut;

use crate::palette::{self, Color};
use crate::render::text::{self, LABEL_SCALE};

/// Contrast threshold on the channel sum: darker bases get white labels
const LIGHT_BASE_SUM: u32 = 400;

/// Label color for a given base fill
pub fn label_color(base: Color) -> Color {
    if base.channel_sum() < LIGHT_BASE_SUM {
        palette::WHITE
    } else {
        palette::BLACK
    }
}

/// Category banner: solid fill with the label centered on its measured ink
/// box. Without a usable font the banner is rendered unlabeled.
pub fn render(
    width: u32,
    height: u32,
    base: Color,
    label: &str,
    font: Option<&FontArc>,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, base.to_rgb());

    let Some(font) = font else {
        return img;
    };

    let scale = PxScale::from(LABEL_SCALE);
    let ink = text::ink_bounds(font, scale, label);

    // Center the ink box, compensating for its layout offsets
    let x = (width as i32 - ink.width) / 2 - ink.min_x;
    let y = (height as i32 - ink.height) / 2 - ink.min_y;

    draw_text_mut(&mut img, label_color(base).to_rgb(), x, y, scale, font, label);

    img
}
