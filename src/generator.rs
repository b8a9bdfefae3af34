use std::fs;
use std::path::PathBuf;

use ab_glyph::FontArc;
use anyhow::Result;
use image::RgbImage;

use crate::manifest::{self, AssetTask, RenderMode};
use crate::palette::palette_color;
use crate::render::{self, category, gradient, silhouette, text};

/// Renders the full asset manifest into an assets directory tree
pub struct Generator {
    root: PathBuf,
    verbose: bool,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verbose: false,
        }
    }

    /// Enable progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Create the assets root and its subdirectories. Safe to call on an
    /// existing tree.
    pub fn ensure_layout(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", self.root.display(), e))?;

        for sub in manifest::SUBDIRS {
            let dir = self.root.join(sub);
            fs::create_dir_all(&dir)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", dir.display(), e))?;
        }

        Ok(())
    }

    /// Render and write every manifest entry in order, returning the number
    /// of files written
    pub fn run(&self) -> Result<usize> {
        self.ensure_layout()?;

        // Resolve the label font once, banners render unlabeled without one
        let font = text::load_label_font();
        if font.is_none() && self.verbose {
            println!("No usable label font found, category banners will be unlabeled");
        }

        let tasks = manifest::manifest();
        for task in &tasks {
            let img = render_task(task, font.as_ref());
            let dest = self.root.join(&task.path);
            render::save_jpeg(&img, &dest)?;

            if self.verbose {
                println!("  Created: {}", dest.display());
            }
        }

        Ok(tasks.len())
    }
}

/// Dispatch one manifest entry to its renderer
fn render_task(task: &AssetTask, font: Option<&FontArc>) -> RgbImage {
    match &task.mode {
        RenderMode::Gradient { start, end } => gradient::render(
            task.width,
            task.height,
            palette_color(*start),
            palette_color(*end),
        ),
        RenderMode::Silhouette { palette_index } => {
            silhouette::render(task.width, task.height, palette_color(*palette_index))
        }
        RenderMode::Category {
            palette_index,
            label,
        } => category::render(
            task.width,
            task.height,
            palette_color(*palette_index),
            label,
            font,
        ),
    }
}
