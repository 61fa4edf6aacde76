//! Sequential icon generation over the fixed size list.

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::Result;

use super::storage::{ensure_output_dir, load_base_image, resize_icon, save_icon, IconSize};

/// Record of one icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Edge length of the icon.
    pub size: IconSize,
    /// Where the icon was written.
    pub path: PathBuf,
    /// Content hash (first 16 hex chars of SHA-256) of the PNG bytes.
    pub hash: String,
}

/// Resizes one base image into every configured icon size.
pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    /// Create a new `IconGenerator` for the given layout.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate every icon, printing a confirmation line for each one.
    ///
    /// Steps run strictly in order: the output directory is prepared, the
    /// base image is loaded, then each size is resized and written. The
    /// first failure aborts the run and later sizes are not attempted.
    pub fn run(&self) -> Result<Vec<GeneratedIcon>> {
        self.run_with(|icon| println!("✓ Created {}", icon.path.display()))
    }

    /// Like [`run`](Self::run), reporting each written icon to `on_created`
    /// instead of stdout.
    pub fn run_with<F>(&self, mut on_created: F) -> Result<Vec<GeneratedIcon>>
    where
        F: FnMut(&GeneratedIcon),
    {
        tracing::info!(
            "Generating {} icons from {}",
            self.config.sizes.len(),
            self.config.source.display()
        );

        ensure_output_dir(&self.config.output_dir)?;

        let base = load_base_image(&self.config.source)?;
        tracing::debug!("Loaded base image {}x{}", base.width(), base.height());

        let mut generated = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            let path = self.config.icon_path(size);
            let icon = resize_icon(&base, size);
            let hash = save_icon(&icon, &path)?;

            tracing::debug!(size = %size, hash = %hash, "Wrote {}", path.display());

            let record = GeneratedIcon { size, path, hash };
            on_created(&record);
            generated.push(record);
        }

        tracing::info!(
            "Wrote {} icons to {}",
            generated.len(),
            self.config.output_dir.display()
        );

        Ok(generated)
    }
}
