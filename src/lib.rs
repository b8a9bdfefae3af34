pub mod generator;
pub mod manifest;
pub mod palette;
pub mod render;

pub use generator::Generator;
pub use manifest::{AssetTask, RenderMode, SUBDIRS, manifest};
pub use palette::{Color, FASHION_PALETTE, palette_color};
