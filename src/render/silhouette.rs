use image::RgbImage;
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::palette::Color;

/// Spacing of the accent grid in pixels
const GRID_STEP: usize = 20;

/// Side length of one accent square. The grid boxes are corner-inclusive,
/// hence 11 pixels for a 10-unit box.
const SQUARE_SIZE: u32 = 11;

/// Model placeholder: solid fill, accent squares on every other grid
/// diagonal, and a centered circle for the figure.
pub fn render(width: u32, height: u32, base: Color) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, base.to_rgb());

    let accent = base.lighten(15).to_rgb();
    for i in (0..width as usize).step_by(GRID_STEP) {
        for j in (0..height as usize).step_by(GRID_STEP) {
            if (i + j) % (2 * GRID_STEP) == 0 {
                let square = Rect::at(i as i32, j as i32).of_size(SQUARE_SIZE, SQUARE_SIZE);
                draw_filled_rect_mut(&mut img, square, accent);
            }
        }
    }

    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = (width.min(height) / 4) as i32;
    draw_filled_ellipse_mut(&mut img, center, radius, radius, base.lighten(30).to_rgb());

    img
}
