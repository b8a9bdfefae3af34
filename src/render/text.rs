use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};

/// Pixel scale for category labels
pub const LABEL_SCALE: f32 = 40.0;

/// Conventional locations of the preferred label face (Arial, plus the
/// usual metric-compatible stand-ins), tried before any directory scan
const PREFERRED_FACES: [&str; 6] = [
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// System font directories scanned when no preferred face loads
const FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

const SCAN_DEPTH: u32 = 3;

/// Two-step font lookup: preferred faces first, then the first loadable
/// face from a sorted scan of the system font directories. Returns `None`
/// when no usable font exists anywhere; labels are skipped in that case.
pub fn load_label_font() -> Option<FontArc> {
    for path in PREFERRED_FACES {
        if let Some(font) = load_face(Path::new(path)) {
            return Some(font);
        }
    }

    for dir in FONT_DIRS {
        if let Some(font) = scan_dir(Path::new(dir), SCAN_DEPTH) {
            return Some(font);
        }
    }

    None
}

fn load_face(path: &Path) -> Option<FontArc> {
    let bytes = fs::read(path).ok()?;
    FontArc::try_from_vec(bytes).ok()
}

/// Depth-bounded search for a loadable .ttf/.otf face. Entries are visited
/// in name order so the fallback face is stable across runs.
fn scan_dir(dir: &Path, depth: u32) -> Option<FontArc> {
    let mut entries: Vec<_> = fs::read_dir(dir).ok()?.flatten().map(|e| e.path()).collect();
    entries.sort();

    let mut subdirs = Vec::new();
    for path in entries {
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("ttf") | Some("otf") => {
                if let Some(font) = load_face(&path) {
                    return Some(font);
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        for sub in subdirs {
            if let Some(font) = scan_dir(&sub, depth - 1) {
                return Some(font);
            }
        }
    }

    None
}

/// Ink bounding box of laid-out text, in the coordinates `draw_text_mut`
/// uses (origin at the layout top-left, baseline at the font's ascent).
/// `min_x`/`min_y` can be nonzero and must be compensated when centering.
#[derive(Debug, Clone, Copy, Default)]
pub struct InkBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Measure the ink box of `text` at `scale`, applying advances and kerning
pub fn ink_bounds(font: &FontArc, scale: PxScale, text: &str) -> InkBounds {
    let scaled = font.as_scaled(scale);

    let mut caret = 0.0f32;
    let mut previous = None;
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outline) = font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            min_x = min_x.min(bounds.min.x);
            min_y = min_y.min(bounds.min.y);
            max_x = max_x.max(bounds.max.x);
            max_y = max_y.max(bounds.max.y);
        }
    }

    // Whitespace-only or empty text leaves no ink
    if min_x > max_x {
        return InkBounds::default();
    }

    InkBounds {
        min_x: min_x.floor() as i32,
        min_y: min_y.floor() as i32,
        width: (max_x.ceil() - min_x.floor()) as i32,
        height: (max_y.ceil() - min_y.floor()) as i32,
    }
}
