use std::path::Path;

use lookbook::palette::Color;
use tempfile::TempDir;

/// Creates a temp directory to serve as the assets root.
/// Cleaned up automatically when dropped.
pub fn create_assets_root() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Counts plain files (not directories) directly inside `dir`
pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .flatten()
        .filter(|entry| entry.path().is_file())
        .count()
}

/// Color constants for tests
pub const DARK_BASE: Color = Color { r: 43, g: 43, b: 43 };
pub const LIGHT_BASE: Color = Color {
    r: 245,
    g: 245,
    b: 245,
};
