use std::path::{Path, PathBuf};

/// How a single asset computes its pixels
#[derive(Debug, Clone)]
pub enum RenderMode {
    /// Vertical blend between two palette colors
    Gradient { start: usize, end: usize },
    /// Solid fill with accent squares and a centered circle
    Silhouette { palette_index: usize },
    /// Solid fill with a centered label
    Category {
        palette_index: usize,
        label: &'static str,
    },
}

/// One asset to generate: dimensions, style and output path relative to the
/// assets root
#[derive(Debug, Clone)]
pub struct AssetTask {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub path: PathBuf,
}

/// Subdirectories of the assets root. `categories` is reserved and stays
/// empty.
pub const SUBDIRS: [&str; 3] = ["fashion", "categories", "onboarding"];

const CATEGORIES: [(&str, &str); 5] = [
    ("dresses", "DRESSES"),
    ("blazers", "BLAZERS"),
    ("accessories", "ACCESSORIES"),
    ("dress", "DRESS"),
    ("blazer", "BLAZER"),
];

const ITEMS: [&str; 3] = ["item1", "item2", "item3"];

const ONBOARDING: [&str; 3] = ["fashion_ai", "virtual_tryons", "personalized"];

/// The full generation manifest, in execution order
pub fn manifest() -> Vec<AssetTask> {
    let mut tasks = Vec::new();

    // Model placeholders, written to the root and mirrored under fashion/
    for i in 0..8 {
        let name = format!("model_{i}.jpg");
        tasks.push(silhouette_task(300, 400, i, PathBuf::from(&name)));
        tasks.push(silhouette_task(300, 400, i, Path::new("fashion").join(&name)));
    }

    // Wishlist thumbnails
    for i in 0..3 {
        let path = PathBuf::from(format!("wishlist_{i}.jpg"));
        tasks.push(silhouette_task(250, 350, i + 2, path));
    }

    // Hero model image
    tasks.push(silhouette_task(400, 500, 0, PathBuf::from("model.jpg")));

    // Category banners
    for (i, &(file, label)) in CATEGORIES.iter().enumerate() {
        tasks.push(AssetTask {
            width: 300,
            height: 200,
            mode: RenderMode::Category {
                palette_index: i + 1,
                label,
            },
            path: Path::new("fashion").join(format!("{file}.jpg")),
        });
    }

    // Item thumbnails
    for (i, name) in ITEMS.iter().enumerate() {
        tasks.push(silhouette_task(250, 300, i + 3, PathBuf::from(format!("{name}.jpg"))));
    }

    // Onboarding gradients over consecutive palette pairs
    for (i, name) in ONBOARDING.iter().enumerate() {
        tasks.push(AssetTask {
            width: 400,
            height: 300,
            mode: RenderMode::Gradient { start: i, end: i + 1 },
            path: Path::new("onboarding").join(format!("{name}.jpg")),
        });
    }

    tasks
}

fn silhouette_task(width: u32, height: u32, palette_index: usize, path: PathBuf) -> AssetTask {
    AssetTask {
        width,
        height,
        mode: RenderMode::Silhouette { palette_index },
        path,
    }
}
